use thiserror::Error;

/// Input rejected by [`GaussSeidelSolver::try_solve`](super::gauss_seidel::GaussSeidelSolver::try_solve).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("time step must be positive")]
    ZeroTimeStep,

    #[error("equation {equation} references body {index} but only {body_count} bodies were given")]
    BodyIndexOutOfRange {
        equation: usize,
        index: usize,
        body_count: usize,
    },

    #[error("equation {equation} has a degenerate effective mass (C = {c})")]
    DegenerateEffectiveMass { equation: usize, c: f32 },
}

pub type SolverResult<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SolverError::BodyIndexOutOfRange {
            equation: 2,
            index: 7,
            body_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "equation 2 references body 7 but only 3 bodies were given"
        );

        let err = SolverError::DegenerateEffectiveMass { equation: 0, c: 0.0 };
        assert!(err.to_string().contains("C = 0"));
    }
}
