/// Implements `literal <op> scalar`, wrapping the literal as the left
/// operand. One float and one integer type only, so unsuffixed literals
/// infer.
macro_rules! impl_literal_lhs {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl_literal_lhs!(@each $trait, $method, $op_fn, f64, i32);
    };
    (@each $trait:ident, $method:ident, $op_fn:path, $($t:ty),*) => {
        $(
            impl<'g> std::ops::$trait<$crate::scalar::Scalar<'g>> for $t {
                type Output = $crate::scalar::Scalar<'g>;

                fn $method(self, rhs: $crate::scalar::Scalar<'g>) -> Self::Output {
                    let lhs = $crate::ops::Operand::into_scalar(self, rhs.graph());
                    $op_fn(lhs, rhs)
                }
            }
        )*
    };
}

pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::{pow_op, powf_op};
pub use sub::sub_op;

