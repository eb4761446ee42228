use cgmath::{InnerSpace, Point3, Vector3, Vector4, Zero};

use crate::constants::{COINCIDENT_AXIS, DENSITY, GRAVITY_EPSILON, RESTITUTION};

/// A single simulated mass.
///
/// Radius and mass are fixed at construction. Position and velocity only
/// change through [`Body::integrate`] and [`Body::resolve_collision`].
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pos: Point3<f32>,
    vel: Vector3<f32>,
    radius: f32,
    mass: f32,
    color: Vector4<f32>,
}

/// `mass = radius^3 * DENSITY`
pub fn mass_from_radius(radius: f32) -> f32 {
    radius * radius * radius * DENSITY
}

impl Body {
    pub fn new(
        radius: f32,
        color: Vector4<f32>,
        pos: Point3<f32>,
        vel: Vector3<f32>,
        mass: f32,
    ) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass,
            color,
        }
    }

    /// A body whose mass is derived from its radius.
    pub fn with_density(
        radius: f32,
        color: Vector4<f32>,
        pos: Point3<f32>,
        vel: Vector3<f32>,
    ) -> Self {
        Self::new(radius, color, pos, vel, mass_from_radius(radius))
    }

    pub fn position(&self) -> Point3<f32> {
        self.pos
    }

    pub fn velocity(&self) -> Vector3<f32> {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn color(&self) -> Vector4<f32> {
        self.color
    }

    pub fn momentum(&self) -> Vector3<f32> {
        self.vel * self.mass
    }

    /// Acceleration this body feels from `other`.
    ///
    /// Pairs closer than [`GRAVITY_EPSILON`] contribute nothing.
    #[inline]
    pub fn acceleration_towards(&self, other: &Body, gravity_strength: f32) -> Vector3<f32> {
        let rel = other.pos - self.pos;
        let dist = rel.magnitude();
        if dist < GRAVITY_EPSILON {
            return Vector3::zero();
        }
        let force = gravity_strength * self.mass * other.mass / (dist * dist);
        (rel / dist) * (force / self.mass)
    }

    /// Sum of accelerations from every body in `bodies` except the one at `own_index`.
    pub fn gravity_from(
        &self,
        own_index: usize,
        bodies: &[Body],
        gravity_strength: f32,
    ) -> Vector3<f32> {
        let mut acc = Vector3::zero();
        for (other_idx, other) in bodies.iter().enumerate() {
            if other_idx == own_index {
                continue;
            }
            acc += self.acceleration_towards(other, gravity_strength);
        }
        acc
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    #[inline]
    pub fn integrate(&mut self, acc: Vector3<f32>, delta: f32) {
        self.vel += acc * delta;
        self.pos += self.vel * delta;
    }

    /// Pull this body towards everything in `snapshot` (skipping
    /// `snapshot[own_index]`, which is this body) and advance it by `delta`.
    ///
    /// `snapshot` is the state of the world at the start of the tick, so
    /// every body of a step sees the same positions.
    pub fn apply_gravity_and_integrate(
        &mut self,
        own_index: usize,
        snapshot: &[Body],
        delta: f32,
        gravity_strength: f32,
    ) {
        let acc = self.gravity_from(own_index, snapshot, gravity_strength);
        self.integrate(acc, delta);
    }

    pub fn check_collision(&self, other: &Body) -> bool {
        (other.pos - self.pos).magnitude() < self.radius + other.radius
    }

    /// Push the pair apart so they just touch, then exchange an impulse
    /// along the contact normal if they are still approaching.
    ///
    /// The overlap is split evenly between the two bodies regardless of mass.
    pub fn resolve_collision(&mut self, other: &mut Body) {
        let mut direction = other.pos - self.pos;
        let mut distance = direction.magnitude();
        if distance == 0.0 {
            direction = COINCIDENT_AXIS.into();
            distance = COINCIDENT_AXIS[0];
        }
        let normal = direction / distance;

        let overlap = (self.radius + other.radius) - distance;
        self.pos -= normal * (overlap * 0.5);
        other.pos += normal * (overlap * 0.5);

        let along_normal = (other.vel - self.vel).dot(normal);
        if along_normal > 0.0 {
            // Already separating
            return;
        }

        let impulse_scalar =
            -(1.0 + RESTITUTION) * along_normal / (1.0 / self.mass + 1.0 / other.mass);
        let impulse = normal * impulse_scalar;
        self.vel -= impulse / self.mass;
        other.vel += impulse / other.mass;
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Point3, Vector3, Vector4};

    use super::*;

    fn ball(x: f32, vx: f32, radius: f32, mass: f32) -> Body {
        Body::new(
            radius,
            Vector4::new(1.0, 1.0, 1.0, 1.0),
            Point3::new(x, 0.0, 0.0),
            Vector3::new(vx, 0.0, 0.0),
            mass,
        )
    }

    #[test]
    fn mass_follows_cube_of_radius() {
        assert!((mass_from_radius(0.5) - 1.25).abs() < 1e-6);
        let b = Body::with_density(
            2.0,
            Vector4::new(0.0, 0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
            Vector3::zero(),
        );
        assert_eq!(b.mass(), 80.0);
    }

    #[test]
    fn gravity_is_inverse_square_towards_other() {
        let a = ball(0.0, 0.0, 0.1, 1.0);
        let b = ball(2.0, 0.0, 0.1, 8.0);
        let acc = a.acceleration_towards(&b, 1.0);
        assert!((acc.x - 2.0).abs() < 1e-6, "{acc:?}");
        assert_eq!(acc.y, 0.0);
        assert_eq!(acc.z, 0.0);

        let back = b.acceleration_towards(&a, 0.5);
        assert!((back.x + 0.125).abs() < 1e-6, "{back:?}");
    }

    #[test]
    fn coincident_bodies_exert_no_force() {
        let a = ball(1.0, 0.0, 0.1, 5.0);
        let b = ball(1.0, 0.0, 0.1, 5.0);
        let acc = a.acceleration_towards(&b, 1.0);
        assert_eq!(acc, Vector3::zero());

        let near = ball(1.05, 0.0, 0.1, 5.0);
        assert_eq!(a.acceleration_towards(&near, 1.0), Vector3::zero());
    }

    #[test]
    fn self_is_skipped_by_index() {
        let bodies = vec![ball(0.0, 0.0, 0.1, 1.0), ball(3.0, 0.0, 0.1, 9.0)];
        let acc = bodies[0].gravity_from(0, &bodies, 1.0);
        assert!((acc.x - 1.0).abs() < 1e-6);

        let lone = vec![ball(0.0, 0.0, 0.1, 1.0)];
        assert_eq!(lone[0].gravity_from(0, &lone, 1.0), Vector3::zero());
    }

    #[test]
    fn integration_updates_velocity_before_position() {
        let mut b = ball(0.0, 1.0, 0.1, 1.0);
        b.integrate(Vector3::new(2.0, 0.0, 0.0), 0.5);
        assert_eq!(b.velocity().x, 2.0);
        assert_eq!(b.position().x, 1.0);
    }

    #[test]
    fn apply_gravity_and_integrate_uses_snapshot() {
        let snapshot = vec![ball(0.0, 0.0, 0.1, 1.0), ball(1.0, 0.0, 0.1, 4.0)];
        let mut b = snapshot[0].clone();
        b.apply_gravity_and_integrate(0, &snapshot, 0.5, 1.0);
        assert!((b.velocity().x - 2.0).abs() < 1e-6);
        assert!((b.position().x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn collision_needs_overlap() {
        let a = ball(0.0, 0.0, 0.5, 1.0);
        assert!(a.check_collision(&ball(0.9, 0.0, 0.5, 1.0)));
        assert!(!a.check_collision(&ball(1.0, 0.0, 0.5, 1.0)));
        assert!(!a.check_collision(&ball(1.5, 0.0, 0.5, 1.0)));
    }

    #[test]
    fn resolution_removes_overlap_evenly() {
        let mut a = ball(0.0, 0.0, 0.5, 1.0);
        let mut b = ball(0.6, 0.0, 0.5, 100.0);
        a.resolve_collision(&mut b);
        assert!((a.position().x + 0.2).abs() < 1e-6);
        assert!((b.position().x - 0.8).abs() < 1e-6);
        // At rest, so no impulse
        assert_eq!(a.velocity(), Vector3::zero());
        assert_eq!(b.velocity(), Vector3::zero());
    }

    #[test]
    fn head_on_equal_masses_keep_eighty_percent() {
        let mut a = ball(0.0, 1.0, 0.5, 2.0);
        let mut b = ball(0.8, -1.0, 0.5, 2.0);
        a.resolve_collision(&mut b);
        let separating = b.velocity().x - a.velocity().x;
        assert!((separating - 0.8 * 2.0).abs() < 1e-5, "{separating}");
        assert!((a.velocity().x + 0.8).abs() < 1e-5);
        assert!((b.velocity().x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn separating_pair_gets_no_impulse() {
        let mut a = ball(0.0, -1.0, 0.5, 1.0);
        let mut b = ball(0.5, 1.0, 0.5, 3.0);
        a.resolve_collision(&mut b);
        assert_eq!(a.velocity().x, -1.0);
        assert_eq!(b.velocity().x, 1.0);
    }

    #[test]
    fn coincident_centers_use_fallback_axis() {
        let mut a = ball(2.0, 0.0, 0.5, 1.0);
        let mut b = ball(2.0, 0.0, 0.5, 1.0);
        a.resolve_collision(&mut b);
        let pa = a.position();
        let pb = b.position();
        assert!(pa.x.is_finite() && pb.x.is_finite());
        assert!(pa.x < 2.0 && pb.x > 2.0);
        assert_eq!(pa.y, 0.0);
        assert_eq!(pb.z, 0.0);
    }
}
