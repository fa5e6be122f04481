pub mod equation;
pub mod error;
pub mod gauss_seidel;
pub mod solution;
pub mod solver_body;
pub mod solver_info;
