//! Tunables owned by the host.
//!
//! The simulation never validates what it is handed; clamping to the
//! ranges below is the host's job.

use std::{f32::consts::TAU, ops::RangeInclusive};

use crate::presets::PlanetParams;

pub const GRAVITY_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const TIME_SCALE_RANGE: RangeInclusive<f32> = 0.0..=2.0;
pub const NEW_PLANET_DISTANCE_RANGE: RangeInclusive<f32> = 3.0..=20.0;
pub const NEW_PLANET_ANGLE_RANGE: RangeInclusive<f32> = 0.0..=TAU;
pub const NEW_PLANET_RADIUS_RANGE: RangeInclusive<f32> = 0.1..=1.0;
/// Longest frame delta handed to the simulation, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub gravity_strength: f32,
    pub time_scale: f32,
    pub paused: bool,
    pub new_planet: PlanetParams,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity_strength: 1.0,
            time_scale: 1.0,
            paused: false,
            new_planet: PlanetParams {
                distance: 8.0,
                angle: 0.0,
                radius: 0.3,
                color: [0.5, 0.5, 0.9, 1.0],
            },
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}

impl Parameters {
    /// Simulation delta for a frame that took `frame_delta` seconds.
    pub fn scaled_delta(&self, frame_delta: f32) -> f32 {
        if self.paused {
            return 0.0;
        }
        frame_delta.min(MAX_FRAME_DELTA) * self.time_scale
    }

    pub fn clamp(&mut self) {
        self.gravity_strength = clamp_to(self.gravity_strength, &GRAVITY_RANGE);
        self.time_scale = clamp_to(self.time_scale, &TIME_SCALE_RANGE);

        let planet = &mut self.new_planet;
        planet.distance = clamp_to(planet.distance, &NEW_PLANET_DISTANCE_RANGE);
        planet.angle = clamp_to(planet.angle, &NEW_PLANET_ANGLE_RANGE);
        planet.radius = clamp_to(planet.radius, &NEW_PLANET_RADIUS_RANGE);
        for channel in &mut planet.color {
            *channel = channel.clamp(0.0, 1.0);
        }
    }
}
