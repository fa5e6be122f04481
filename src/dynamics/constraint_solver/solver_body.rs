use glam::Mat3A;
use std::{cell::RefCell, rc::Rc};

/// What the solver needs to know about a rigid body.
///
/// `index` addresses the body's slot in the [`Solution`](super::solution::Solution)
/// arrays and is only meaningful for the current solve.
pub trait Body {
    fn index(&self) -> usize;
    fn inv_mass_solve(&self) -> f32;
    fn inv_inertia_world_solve(&self) -> Mat3A;
}

/// A body snapshot holding exactly the values the solver reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverBody {
    pub index: usize,
    pub inv_mass: f32,
    pub inv_inertia_world: Mat3A,
}

impl SolverBody {
    #[must_use]
    pub const fn new(index: usize, inv_mass: f32, inv_inertia_world: Mat3A) -> Self {
        Self {
            index,
            inv_mass,
            inv_inertia_world,
        }
    }

    /// A body with infinite mass and inertia. Impulses never move it.
    #[must_use]
    pub const fn fixed(index: usize) -> Self {
        Self::new(index, 0.0, Mat3A::ZERO)
    }

    /// A solid sphere of uniform density. A non-positive radius gives a
    /// point mass, which rotational rows cannot turn.
    #[must_use]
    pub fn sphere(index: usize, mass: f32, radius: f32) -> Self {
        if mass == 0.0 {
            return Self::fixed(index);
        }

        if radius <= 0.0 {
            return Self::new(index, 1.0 / mass, Mat3A::ZERO);
        }

        let inertia = 0.4 * mass * radius * radius;
        Self::new(index, 1.0 / mass, Mat3A::from_diagonal(glam::Vec3::splat(1.0 / inertia)))
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.inv_mass == 0.0 && self.inv_inertia_world == Mat3A::ZERO
    }
}

impl Body for SolverBody {
    fn index(&self) -> usize {
        self.index
    }

    fn inv_mass_solve(&self) -> f32 {
        self.inv_mass
    }

    fn inv_inertia_world_solve(&self) -> Mat3A {
        self.inv_inertia_world
    }
}

impl<B: Body + ?Sized> Body for &B {
    fn index(&self) -> usize {
        (**self).index()
    }

    fn inv_mass_solve(&self) -> f32 {
        (**self).inv_mass_solve()
    }

    fn inv_inertia_world_solve(&self) -> Mat3A {
        (**self).inv_inertia_world_solve()
    }
}

impl<B: Body + ?Sized> Body for Rc<B> {
    fn index(&self) -> usize {
        (**self).index()
    }

    fn inv_mass_solve(&self) -> f32 {
        (**self).inv_mass_solve()
    }

    fn inv_inertia_world_solve(&self) -> Mat3A {
        (**self).inv_inertia_world_solve()
    }
}

// Bodies shared with the simulation are usually `Rc<RefCell<_>>`.
impl<B: Body + ?Sized> Body for RefCell<B> {
    fn index(&self) -> usize {
        self.borrow().index()
    }

    fn inv_mass_solve(&self) -> f32 {
        self.borrow().inv_mass_solve()
    }

    fn inv_inertia_world_solve(&self) -> Mat3A {
        self.borrow().inv_inertia_world_solve()
    }
}
