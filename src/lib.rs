//! Velocity-level rigid-body constraint solving with a projected
//! Gauss-Seidel (sequential impulse) iteration.
//!
//! Contact generation and integration live elsewhere. This crate takes a
//! list of [`Equation`]s, resolves them into per-body velocity deltas
//! ([`Solution`]) and writes the resolved force back onto each equation.

pub mod dynamics;
pub mod linear_math;
pub mod logging;

pub use dynamics::constraint_solver::{
    equation::Equation,
    error::{SolverError, SolverResult},
    gauss_seidel::GaussSeidelSolver,
    solution::Solution,
    solver_body::{Body, SolverBody},
    solver_info::SolverInfo,
};
pub use glam;
pub use linear_math::JacobianElement;
