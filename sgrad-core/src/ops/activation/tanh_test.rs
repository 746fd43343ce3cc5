use crate::autograd::{check_grad, GradCheckError, Op};
use crate::Graph;
use approx::assert_relative_eq;

#[test]
fn test_tanh_forward_backward() {
    let graph = Graph::new();
    let x = graph.scalar(0.5);
    let t = x.tanh();
    assert_relative_eq!(t.value(), 0.5_f64.tanh());
    assert_eq!(t.op(), Op::Tanh(x.id()));
    t.backward();
    assert_relative_eq!(x.grad(), 1.0 - 0.5_f64.tanh().powi(2), epsilon = 1e-15);
}

#[test]
fn test_tanh_at_zero() {
    let graph = Graph::new();
    let x = graph.scalar(0.0);
    let t = x.tanh();
    t.backward();
    assert_eq!(t.value(), 0.0);
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_tanh_grad_check() -> Result<(), GradCheckError> {
    check_grad(|_g, xs| Ok((xs[0] * xs[1]).tanh()), &[0.6, -1.4], 1e-6, 1e-4)
}
