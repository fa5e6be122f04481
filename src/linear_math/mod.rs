use glam::{Mat3A, Vec3A};

/// One body's row of a constraint Jacobian, split into a linear part and
/// an angular part.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JacobianElement {
    pub spatial: Vec3A,
    pub rotational: Vec3A,
}

impl JacobianElement {
    pub const ZERO: Self = Self {
        spatial: Vec3A::ZERO,
        rotational: Vec3A::ZERO,
    };

    #[must_use]
    pub const fn new(spatial: Vec3A, rotational: Vec3A) -> Self {
        Self {
            spatial,
            rotational,
        }
    }

    /// 6-component dot product against another element.
    #[must_use]
    pub fn multiply_element(&self, other: &Self) -> f32 {
        self.spatial.dot(other.spatial) + self.rotational.dot(other.rotational)
    }

    /// 6-component dot product against a (linear, angular) velocity pair.
    #[must_use]
    pub fn multiply_vectors(&self, linear: Vec3A, angular: Vec3A) -> f32 {
        self.spatial.dot(linear) + self.rotational.dot(angular)
    }

    /// Velocity change caused by a unit impulse along this row.
    #[must_use]
    pub fn linear_response(&self, inv_mass: f32) -> Vec3A {
        self.spatial * inv_mass
    }

    #[must_use]
    pub fn angular_response(&self, inv_inertia_world: &Mat3A) -> Vec3A {
        *inv_inertia_world * self.rotational
    }
}
