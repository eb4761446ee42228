//! Circular-orbit initial conditions around the anchor.
//!
//! Speeds are always computed against [`ANCHOR_MASS`], not against the
//! mass of whatever body currently sits at index 0.

use cgmath::{Point3, Vector3};

use crate::{
    constants::{
        ANCHOR_MASS, EXPLICIT_GRAVITY, EXPLICIT_INCLINATION_RANGE, ORBIT_ANGLE_RANGE,
        ORBIT_DISTANCE_RANGE, ORBIT_INCLINATION_RANGE, VERTICAL_DAMPING,
    },
    sampler::UnitSampler,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    pub distance: f32,
    /// Radians, in the XZ plane.
    pub angle: f32,
    /// Radians, tilt out of the XZ plane.
    pub inclination: f32,
    pub speed: f32,
}

/// Speed of a circular orbit at `distance`: `sqrt(g * ANCHOR_MASS / distance)`.
///
/// Non-positive distances give a non-finite result.
pub fn circular_speed(gravity_strength: f32, distance: f32) -> f32 {
    (gravity_strength * ANCHOR_MASS / distance).sqrt()
}

impl OrbitParameters {
    /// Draws distance, angle and inclination, in that order.
    pub fn random(gravity_strength: f32, sampler: &mut dyn UnitSampler) -> Self {
        let distance = sampler.uniform(ORBIT_DISTANCE_RANGE);
        let angle = sampler.uniform(ORBIT_ANGLE_RANGE);
        let inclination = sampler.uniform(ORBIT_INCLINATION_RANGE);
        Self {
            distance,
            angle,
            inclination,
            speed: circular_speed(gravity_strength, distance),
        }
    }

    /// Fixed distance and angle with gravity strength 1. Only the
    /// inclination is drawn.
    pub fn explicit(distance: f32, angle: f32, sampler: &mut dyn UnitSampler) -> Self {
        let inclination = sampler.uniform(EXPLICIT_INCLINATION_RANGE);
        Self {
            distance,
            angle,
            inclination,
            speed: circular_speed(EXPLICIT_GRAVITY, distance),
        }
    }

    pub fn position_and_velocity(&self) -> (Point3<f32>, Vector3<f32>) {
        let (sin_a, cos_a) = self.angle.sin_cos();
        let pos = Point3::new(
            self.distance * cos_a,
            self.distance * self.inclination.sin(),
            self.distance * sin_a,
        );
        let vel = Vector3::new(
            -self.speed * sin_a,
            self.speed * self.inclination.cos() * VERTICAL_DAMPING,
            self.speed * cos_a,
        );
        (pos, vel)
    }
}
