use gauss_seidel::{
    Body, Equation, JacobianElement, SolverBody,
    glam::{Mat3A, Vec3A},
};

/// Equation with hand-set coefficients. `compute_b` returns `bias` for any
/// time step; `compute_c` derives `G M^-1 G^T + eps` unless `c` overrides it.
#[derive(Clone, Debug)]
pub struct TestEquation {
    pub body_a: SolverBody,
    pub body_b: SolverBody,
    pub je_a: JacobianElement,
    pub je_b: JacobianElement,
    pub bias: f32,
    pub eps: f32,
    pub min_force: f32,
    pub max_force: f32,
    pub c: Option<f32>,
    pub multiplier: f32,
}

impl TestEquation {
    /// Drives the velocity of `body_b` relative to `body_a` along `axis`
    /// towards zero, given the current relative velocity `rel_vel`.
    pub fn linear(body_a: SolverBody, body_b: SolverBody, axis: Vec3A, rel_vel: f32) -> Self {
        Self {
            body_a,
            body_b,
            je_a: JacobianElement::new(-axis, Vec3A::ZERO),
            je_b: JacobianElement::new(axis, Vec3A::ZERO),
            bias: -rel_vel,
            eps: 0.0,
            min_force: f32::NEG_INFINITY,
            max_force: f32::INFINITY,
            c: None,
            multiplier: 0.0,
        }
    }

    pub fn with_limits(mut self, min_force: f32, max_force: f32) -> Self {
        self.min_force = min_force;
        self.max_force = max_force;
        self
    }

    pub fn with_eps(mut self, eps: f32) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_c(mut self, c: f32) -> Self {
        self.c = Some(c);
        self
    }

    fn gimgt(body: &SolverBody, je: &JacobianElement) -> f32 {
        body.inv_mass * je.spatial.length_squared()
            + je.rotational.dot(body.inv_inertia_world * je.rotational)
    }
}

impl Equation for TestEquation {
    fn body_a(&self) -> &dyn Body {
        &self.body_a
    }

    fn body_b(&self) -> &dyn Body {
        &self.body_b
    }

    fn compute_c(&self) -> f32 {
        self.c.unwrap_or_else(|| {
            Self::gimgt(&self.body_a, &self.je_a) + Self::gimgt(&self.body_b, &self.je_b) + self.eps
        })
    }

    fn compute_b(&self, _time_step: f32) -> f32 {
        self.bias
    }

    fn eps(&self) -> f32 {
        self.eps
    }

    fn min_force(&self) -> f32 {
        self.min_force
    }

    fn max_force(&self) -> f32 {
        self.max_force
    }

    fn je_a(&self) -> JacobianElement {
        self.je_a
    }

    fn je_b(&self) -> JacobianElement {
        self.je_b
    }

    fn multiplier(&self) -> f32 {
        self.multiplier
    }

    fn set_multiplier(&mut self, multiplier: f32) {
        self.multiplier = multiplier;
    }
}

pub fn unit_body(index: usize) -> SolverBody {
    SolverBody::new(index, 1.0, Mat3A::IDENTITY)
}

/// Three unit bodies in a row, each neighbouring pair separating along X.
pub fn chain() -> Vec<TestEquation> {
    vec![
        TestEquation::linear(unit_body(0), unit_body(1), Vec3A::X, 1.0),
        TestEquation::linear(unit_body(1), unit_body(2), Vec3A::X, 2.0),
    ]
}
