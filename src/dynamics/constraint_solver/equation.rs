use super::solver_body::Body;
use crate::linear_math::JacobianElement;

/// One scalar velocity constraint between two bodies.
///
/// The coefficients are produced by whatever built the constraint (contact,
/// friction, joint limit, motor...). The solver only reads them, then writes
/// the resolved force back through [`Equation::set_multiplier`].
pub trait Equation {
    fn body_a(&self) -> &dyn Body;
    fn body_b(&self) -> &dyn Body;

    /// Diagonal of the effective mass matrix, `G M^-1 G^T + eps`.
    fn compute_c(&self) -> f32;
    /// Velocity bias for a step of `time_step` seconds.
    fn compute_b(&self, time_step: f32) -> f32;
    fn eps(&self) -> f32;

    fn min_force(&self) -> f32;
    fn max_force(&self) -> f32;

    fn je_a(&self) -> JacobianElement;
    fn je_b(&self) -> JacobianElement;

    fn multiplier(&self) -> f32;
    fn set_multiplier(&mut self, multiplier: f32);
}

macro_rules! forward_equation {
    ($($ty:ty),+) => {$(
        impl<E: Equation + ?Sized> Equation for $ty {
            fn body_a(&self) -> &dyn Body {
                (**self).body_a()
            }

            fn body_b(&self) -> &dyn Body {
                (**self).body_b()
            }

            fn compute_c(&self) -> f32 {
                (**self).compute_c()
            }

            fn compute_b(&self, time_step: f32) -> f32 {
                (**self).compute_b(time_step)
            }

            fn eps(&self) -> f32 {
                (**self).eps()
            }

            fn min_force(&self) -> f32 {
                (**self).min_force()
            }

            fn max_force(&self) -> f32 {
                (**self).max_force()
            }

            fn je_a(&self) -> JacobianElement {
                (**self).je_a()
            }

            fn je_b(&self) -> JacobianElement {
                (**self).je_b()
            }

            fn multiplier(&self) -> f32 {
                (**self).multiplier()
            }

            fn set_multiplier(&mut self, multiplier: f32) {
                (**self).set_multiplier(multiplier);
            }
        }
    )+};
}

forward_equation!(Box<E>, &mut E);
