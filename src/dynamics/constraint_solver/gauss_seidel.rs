use super::{
    equation::Equation,
    error::{SolverError, SolverResult},
    solution::Solution,
    solver_info::SolverInfo,
};
use ahash::AHashSet;
use log::{debug, trace, warn};
use std::time::Duration;

/// Projected Gauss-Seidel ("sequential impulse") equation solver.
///
/// Equations are relaxed one at a time in list order, each one seeing the
/// velocity deltas already written by the equations before it in the same
/// iteration. More iterations give a better solution at a higher cost.
pub struct GaussSeidelSolver<E: Equation = Box<dyn Equation>> {
    equations: Vec<E>,
    solution: Solution,
    info: SolverInfo,
    residual: f32,

    solve_inv_cs: Vec<f32>,
    solve_bs: Vec<f32>,
    solve_lambda: Vec<f32>,
}

impl<E: Equation> Default for GaussSeidelSolver<E> {
    fn default() -> Self {
        Self::with_info(SolverInfo::DEFAULT)
    }
}

impl<E: Equation> GaussSeidelSolver<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_info(info: SolverInfo) -> Self {
        Self {
            equations: Vec::new(),
            solution: Solution {
                velocity_deltas: Vec::new(),
                angular_velocity_deltas: Vec::new(),
                iterations: 0,
            },
            info,
            residual: 0.0,
            solve_inv_cs: Vec::new(),
            solve_bs: Vec::new(),
            solve_lambda: Vec::new(),
        }
    }

    #[must_use]
    pub const fn info(&self) -> &SolverInfo {
        &self.info
    }

    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.info.max_iterations
    }

    pub const fn set_max_iterations(&mut self, max_iterations: usize) {
        self.info.max_iterations = max_iterations;
    }

    #[must_use]
    pub const fn tolerance(&self) -> f32 {
        self.info.tolerance
    }

    pub const fn set_tolerance(&mut self, tolerance: f32) {
        self.info.tolerance = tolerance;
    }

    pub fn add_equation(&mut self, equation: E) {
        self.equations.push(equation);
    }

    /// Removes the equation at `index`, keeping the order of the rest.
    pub fn remove_equation(&mut self, index: usize) -> Option<E> {
        (index < self.equations.len()).then(|| self.equations.remove(index))
    }

    pub fn clear_equations(&mut self) {
        self.equations.clear();
    }

    #[must_use]
    pub fn equations(&self) -> &[E] {
        &self.equations
    }

    #[must_use]
    pub fn equations_mut(&mut self) -> &mut [E] {
        &mut self.equations
    }

    #[must_use]
    pub fn num_equations(&self) -> usize {
        self.equations.len()
    }

    /// Number of distinct bodies referenced by the current equations.
    #[must_use]
    pub fn working_set_size(&self) -> usize {
        self.equations
            .iter()
            .flat_map(|eq| [eq.body_a().index(), eq.body_b().index()])
            .collect::<AHashSet<_>>()
            .len()
    }

    /// Summed `|delta lambda|` of the last iteration of the last solve.
    #[must_use]
    pub const fn residual(&self) -> f32 {
        self.residual
    }

    #[must_use]
    pub const fn solution(&self) -> &Solution {
        &self.solution
    }

    fn reset(&mut self, num_bodies: usize) {
        self.solution.reset(num_bodies);
        self.residual = 0.0;

        self.solve_inv_cs.clear();
        self.solve_bs.clear();
        self.solve_lambda.clear();
    }

    /// Checks the inputs `solve` assumes, then solves.
    pub fn try_solve(&mut self, time_step: Duration, num_bodies: usize) -> SolverResult<usize> {
        if time_step.is_zero() {
            return Err(SolverError::ZeroTimeStep);
        }

        for (equation, eq) in self.equations.iter().enumerate() {
            for index in [eq.body_a().index(), eq.body_b().index()] {
                if index >= num_bodies {
                    return Err(SolverError::BodyIndexOutOfRange {
                        equation,
                        index,
                        body_count: num_bodies,
                    });
                }
            }

            let c = eq.compute_c();
            if !(c.is_finite() && c > 0.0) {
                return Err(SolverError::DegenerateEffectiveMass { equation, c });
            }
        }

        Ok(self.solve(time_step, num_bodies))
    }

    /// Resolves every equation for one step and returns the number of
    /// iterations performed.
    ///
    /// Afterwards [`Self::solution`] holds the per-body velocity deltas and
    /// every equation holds its resolved force as its multiplier. Degenerate
    /// input (zero time step, `C <= 0`) is logged and yields non-finite
    /// values; use [`Self::try_solve`] to reject it instead.
    pub fn solve(&mut self, time_step: Duration, num_bodies: usize) -> usize {
        self.reset(num_bodies);

        if self.equations.is_empty() {
            return 0;
        }

        let h = time_step.as_secs_f32();
        if h <= 0.0 {
            warn!("Solving with a zero time step, biases and multipliers will not be finite");
        }

        // Things that do not change during iteration can be computed once
        for (j, eq) in self.equations.iter().enumerate() {
            debug_assert!(
                eq.body_a().index() < num_bodies && eq.body_b().index() < num_bodies,
                "equation {j} references a body outside of 0..{num_bodies}"
            );

            let c = eq.compute_c();
            if !(c.is_finite() && c > 0.0) {
                warn!("Equation {j} has a degenerate effective mass (C = {c})");
            }

            self.solve_inv_cs.push(1.0 / c);
            self.solve_bs.push(eq.compute_b(h));
            self.solve_lambda.push(0.0);
        }

        let tol_squared = self.info.tolerance * self.info.tolerance;
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..self.info.max_iterations {
            iterations = iter + 1;

            let mut delta_lambda_tot = 0.0;
            for (j, eq) in self.equations.iter().enumerate() {
                delta_lambda_tot += resolve_single_equation(
                    eq,
                    &mut self.solution,
                    self.solve_inv_cs[j],
                    self.solve_bs[j],
                    &mut self.solve_lambda[j],
                );
            }

            self.residual = delta_lambda_tot;
            if delta_lambda_tot * delta_lambda_tot < tol_squared {
                converged = true;
                break;
            }
        }

        if !converged && iterations > 0 {
            debug!(
                "Gauss-Seidel hit the iteration limit ({iterations}) with residual {}",
                self.residual
            );
        }

        for (eq, lambda) in self.equations.iter_mut().zip(&self.solve_lambda) {
            eq.set_multiplier(lambda / h);
        }

        trace!(
            "Solved {} equations for {num_bodies} bodies in {iterations} iterations (residual {})",
            self.equations.len(),
            self.residual
        );

        self.solution.iterations = iterations;
        iterations
    }
}

/// Relaxes one equation against the current deltas, applies the clamped
/// impulse change to both bodies and returns `|delta lambda|`.
fn resolve_single_equation<E: Equation + ?Sized>(
    eq: &E,
    solution: &mut Solution,
    inv_c: f32,
    b: f32,
    lambda: &mut f32,
) -> f32 {
    let body_a = eq.body_a();
    let body_b = eq.body_b();
    let idx_a = body_a.index();
    let idx_b = body_b.index();

    let je_a = eq.je_a();
    let je_b = eq.je_b();

    let gw_lambda = je_a.multiply_vectors(
        solution.velocity_deltas[idx_a],
        solution.angular_velocity_deltas[idx_a],
    ) + je_b.multiply_vectors(
        solution.velocity_deltas[idx_b],
        solution.angular_velocity_deltas[idx_b],
    );

    let mut delta_lambda = inv_c * (b - gw_lambda - eq.eps() * *lambda);

    // Clamp if we are outside the min/max interval
    let sum = *lambda + delta_lambda;
    if sum < eq.min_force() {
        delta_lambda = eq.min_force() - *lambda;
    } else if sum > eq.max_force() {
        delta_lambda = eq.max_force() - *lambda;
    }
    *lambda += delta_lambda;

    solution.apply_impulse(
        idx_a,
        je_a.linear_response(body_a.inv_mass_solve()),
        je_a.angular_response(&body_a.inv_inertia_world_solve()),
        delta_lambda,
    );
    solution.apply_impulse(
        idx_b,
        je_b.linear_response(body_b.inv_mass_solve()),
        je_b.angular_response(&body_b.inv_inertia_world_solve()),
        delta_lambda,
    );

    delta_lambda.abs()
}
