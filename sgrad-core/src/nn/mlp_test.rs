use super::*;
use crate::autograd::check_grad;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_mlp_default_activations() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::new(&graph, 3, &[4, 4, 1], None, &mut rng)?;
    let acts: Vec<Activation> = mlp
        .layers()
        .iter()
        .map(|l| l.neurons()[0].activation())
        .collect();
    assert_eq!(acts, vec![Activation::Relu, Activation::Relu, Activation::Linear]);
    assert_eq!(mlp.nin(), 3);
    assert_eq!(mlp.nout(), 1);
    // (3+1)*4 + (4+1)*4 + (4+1)*1
    assert_eq!(mlp.parameters().len(), 41);
    Ok(())
}

#[test]
fn test_mlp_activation_count_mismatch() {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = Mlp::new(&graph, 2, &[3, 1], Some(&[Activation::Tanh]), &mut rng);
    assert!(matches!(
        result,
        Err(SgradError::ShapeMismatch {
            expected: 2,
            actual: 1,
            ..
        })
    ));
    assert!(graph.is_empty());
}

#[test]
fn test_mlp_from_labels() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(1);
    let mlp = Mlp::from_labels(&graph, 2, &[2, 1], &["tanh", "Sigmoid"], &mut rng)?;
    assert_eq!(
        mlp.to_string(),
        "MLP of [Layer of [tanh Neuron(2), tanh Neuron(2)], Layer of [sigmoid Neuron(2)]]"
    );
    let bad = Mlp::from_labels(&graph, 2, &[1], &["swish"], &mut rng);
    assert_eq!(bad.unwrap_err(), SgradError::UnknownActivation("swish".to_string()));
    Ok(())
}

#[test]
fn test_mlp_forward_known_weights() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(2);
    let mlp = Mlp::with_init(
        &graph,
        2,
        &[2, 1],
        Some(&[Activation::Relu, Activation::Linear]),
        &Init::Constant(0.5),
        &mut rng,
    )?;
    let xs = [graph.scalar(1.0), graph.scalar(3.0)];
    let out = mlp.forward(&xs)?;
    // Each hidden unit: relu(0.5 + 1.5) = 2; output: 0.5*2 + 0.5*2 = 2.
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0].value(), 2.0);

    out[0].backward();
    // d out / d x_j = sum_h 0.5 * 0.5 = 0.5
    assert_relative_eq!(xs[0].grad(), 0.5);
    assert_relative_eq!(xs[1].grad(), 0.5);
    Ok(())
}

#[test]
fn test_mlp_named_parameters_are_hierarchical() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(3);
    let mlp = Mlp::new(&graph, 1, &[2, 1], None, &mut rng)?;
    let names: Vec<String> = mlp.named_parameters().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        names,
        vec!["0.0.w0", "0.0.b", "0.1.w0", "0.1.b", "1.0.w0", "1.0.w1", "1.0.b"]
    );
    Ok(())
}

#[test]
fn test_mlp_zero_grad_after_rewind() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(4);
    let mlp = Mlp::new(&graph, 2, &[3, 1], None, &mut rng)?;
    let params = graph.checkpoint();

    for step in 0..3 {
        let xs = [graph.scalar(0.5), graph.scalar(-1.0)];
        let out = mlp.forward(&xs)?;
        out[0].backward();
        assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0), "step {}", step);
        mlp.zero_grad();
        assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
        graph.rewind(params);
        assert_eq!(graph.len(), params.len());
    }
    Ok(())
}

#[test]
fn test_mlp_rejects_wrong_width() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mlp = Mlp::new(&graph, 3, &[1], None, &mut rng)?;
    let result = mlp.forward(&[graph.scalar(1.0)]);
    assert!(matches!(
        result,
        Err(SgradError::ShapeMismatch {
            expected: 3,
            actual: 1,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_mlp_input_gradients_match_finite_differences() -> Result<(), crate::autograd::GradCheckError> {
    check_grad(
        |g, xs| {
            let mut rng = StdRng::seed_from_u64(6);
            let mlp = Mlp::new(g, 2, &[3, 1], Some(&[Activation::Tanh, Activation::Sigmoid]), &mut rng)?;
            Ok(mlp.forward(xs)?[0])
        },
        &[0.3, -0.8],
        1e-6,
        1e-4,
    )
}

#[test]
fn test_mlp_rebuild_round_trips_values() -> Result<(), SgradError> {
    let graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mlp = Mlp::new(&graph, 2, &[3, 1], None, &mut rng)?;
    let values: Vec<f64> = mlp.parameters().iter().map(|p| p.value() * 2.0).collect();

    let step = Graph::new();
    let copy = mlp.rebuild(&step, &values)?;
    let rebuilt: Vec<f64> = copy.parameters().iter().map(|p| p.value()).collect();
    assert_eq!(rebuilt, values);
    assert_eq!(copy.to_string(), mlp.to_string());

    let short = mlp.rebuild(&step, &values[1..]);
    assert!(matches!(
        short,
        Err(SgradError::ShapeMismatch {
            expected: 13,
            actual: 12,
            ..
        })
    ));
    Ok(())
}
