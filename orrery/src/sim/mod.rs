use std::fmt::Display;

use cgmath::{Vector3, Vector4, Zero};
use log::{debug, trace};

use crate::{
    Body,
    constants::{EXPLICIT_GRAVITY, RANDOM_RADIUS_RANGE, VISUAL_TIME_RATE},
    orbit::OrbitParameters,
    presets::{PlanetParams, default_planets, random_planet_color, sun},
    sampler::UnitSampler,
    snapshot::BodyInstance,
};

mod direct;

pub use direct::{accumulate_gravity, integrate, resolve_collisions};

/// Owns every body and advances them together.
///
/// Index 0 always holds the anchor.
pub struct World {
    bodies: Vec<Body>,
    out_buffer: Vec<Vector3<f32>>,
    time: f32,
    ticks: u64,
    sampler: Box<dyn UnitSampler>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// A freshly reset world drawing from the thread RNG.
    pub fn new() -> Self {
        Self::with_sampler(Box::new(rand::rng()))
    }

    pub fn with_sampler(sampler: Box<dyn UnitSampler>) -> Self {
        let mut world = Self {
            bodies: Vec::new(),
            out_buffer: Vec::new(),
            time: 0.0,
            ticks: 0,
            sampler,
        };
        world.reset();
        world
    }

    /// Discard everything and start over with the anchor and the default planets.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.time = 0.0;
        self.ticks = 0;

        self.bodies.push(sun());
        for planet in default_planets() {
            self.add_body_with_params(planet);
        }
        debug!("World reset with {} bodies", self.bodies.len());
    }

    /// Advance by `delta`.
    ///
    /// Gravity is computed for every body from the same snapshot, then all
    /// bodies are integrated, then overlapping pairs are resolved in index order.
    pub fn step(&mut self, delta: f32, gravity_strength: f32) {
        self.time += delta * VISUAL_TIME_RATE;

        self.out_buffer.resize(self.bodies.len(), Vector3::zero());
        accumulate_gravity(&self.bodies, &mut self.out_buffer, gravity_strength);
        integrate(&mut self.bodies, &mut self.out_buffer, delta);

        let collisions = resolve_collisions(&mut self.bodies);
        if collisions > 0 {
            trace!("Tick {}: resolved {} collisions", self.ticks, collisions);
        }
        self.ticks += 1;
    }

    /// Add a body on a random orbit, with its speed computed at gravity strength 1.
    pub fn add_random_body(&mut self) {
        self.add_random_body_with_gravity(EXPLICIT_GRAVITY);
    }

    /// Same as [`World::add_random_body`], with the orbit speed computed at
    /// `gravity_strength` instead of 1.
    pub fn add_random_body_with_gravity(&mut self, gravity_strength: f32) {
        let orbit = OrbitParameters::random(gravity_strength, self.sampler.as_mut());
        let (pos, vel) = orbit.position_and_velocity();
        let radius = self.sampler.uniform(RANDOM_RADIUS_RANGE);
        let color = random_planet_color(self.sampler.as_mut());

        self.bodies.push(Body::with_density(radius, color, pos, vel));
        debug!(
            "Added random body #{} at distance {:.2}, radius {:.2}",
            self.bodies.len() - 1,
            orbit.distance,
            radius
        );
    }

    /// Add a body at a fixed distance and angle. Only the inclination is random.
    pub fn add_body_with_params(&mut self, params: PlanetParams) {
        let orbit = OrbitParameters::explicit(params.distance, params.angle, self.sampler.as_mut());
        let (pos, vel) = orbit.position_and_velocity();
        let color: Vector4<f32> = params.color.into();

        self.bodies.push(Body::with_density(params.radius, color, pos, vel));
        trace!(
            "Added body #{} at distance {:.2}, angle {:.2}",
            self.bodies.len() - 1,
            params.distance,
            params.angle
        );
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn dominant(&self) -> &Body {
        &self.bodies[0]
    }

    /// Render snapshots, index 0 flagged as dominant.
    pub fn instances(&self) -> Vec<BodyInstance> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| BodyInstance::new(body, i == 0))
            .collect()
    }

    /// Visual clock, advancing at half the physical rate.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn total_momentum(&self) -> Vector3<f32> {
        self.bodies
            .iter()
            .fold(Vector3::zero(), |acc, body| acc + body.momentum())
    }
}

const SEC_PER_MINUTE: f32 = 60.0;
const SEC_PER_HOUR: f32 = SEC_PER_MINUTE * 60.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ElapsedTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f32,
    pub ticks: u64,
}

impl Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0>2}:{:0>2}:{:05.2} ({} ticks)",
            self.hours, self.minutes, self.seconds, self.ticks
        )
    }
}

pub fn compute_elapsed_time(time: f32, ticks: u64) -> ElapsedTime {
    let mut time_s = time.max(0.0);

    let hours = (time_s / SEC_PER_HOUR).floor();
    time_s -= hours * SEC_PER_HOUR;
    let minutes = (time_s / SEC_PER_MINUTE).floor();
    let seconds = time_s - minutes * SEC_PER_MINUTE;

    ElapsedTime {
        hours: hours as u64,
        minutes: minutes as u64,
        seconds,
        ticks,
    }
}
