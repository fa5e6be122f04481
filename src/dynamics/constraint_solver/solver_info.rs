/// Iteration limits for [`GaussSeidelSolver`](super::gauss_seidel::GaussSeidelSolver).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverInfo {
    /// Upper bound on iterations per solve.
    pub max_iterations: usize,
    /// Stop once the summed `|delta lambda|` of an iteration drops below this.
    pub tolerance: f32,
}

impl SolverInfo {
    pub const MAX_ITERATIONS: usize = 10;
    pub const TOLERANCE: f32 = 1e-7;

    pub const DEFAULT: Self = Self {
        max_iterations: Self::MAX_ITERATIONS,
        tolerance: Self::TOLERANCE,
    };

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for SolverInfo {
    fn default() -> Self {
        Self::DEFAULT
    }
}
