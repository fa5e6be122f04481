pub mod constraint_solver;
