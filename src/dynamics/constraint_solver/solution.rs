use glam::Vec3A;

/// Per-body velocity corrections produced by one solve, indexed by
/// [`Body::index`](super::solver_body::Body::index).
///
/// Valid until the next solve overwrites it.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    pub(crate) velocity_deltas: Vec<Vec3A>,
    pub(crate) angular_velocity_deltas: Vec<Vec3A>,
    pub(crate) iterations: usize,
}

impl Solution {
    #[must_use]
    pub fn velocity_deltas(&self) -> &[Vec3A] {
        &self.velocity_deltas
    }

    #[must_use]
    pub fn angular_velocity_deltas(&self) -> &[Vec3A] {
        &self.angular_velocity_deltas
    }

    #[must_use]
    pub fn velocity_delta(&self, body_index: usize) -> Option<Vec3A> {
        self.velocity_deltas.get(body_index).copied()
    }

    #[must_use]
    pub fn angular_velocity_delta(&self, body_index: usize) -> Option<Vec3A> {
        self.angular_velocity_deltas.get(body_index).copied()
    }

    #[must_use]
    pub fn num_bodies(&self) -> usize {
        self.velocity_deltas.len()
    }

    /// Iterations performed by the solve that produced this solution.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// Clears and zero-fills both arrays to `num_bodies`, keeping capacity.
    pub(crate) fn reset(&mut self, num_bodies: usize) {
        self.velocity_deltas.clear();
        self.angular_velocity_deltas.clear();
        self.velocity_deltas.resize(num_bodies, Vec3A::ZERO);
        self.angular_velocity_deltas.resize(num_bodies, Vec3A::ZERO);
        self.iterations = 0;
    }

    pub(crate) fn apply_impulse(
        &mut self,
        body_index: usize,
        linear_component: Vec3A,
        angular_component: Vec3A,
        impulse_magnitude: f32,
    ) {
        self.velocity_deltas[body_index] += linear_component * impulse_magnitude;
        self.angular_velocity_deltas[body_index] += angular_component * impulse_magnitude;
    }
}
