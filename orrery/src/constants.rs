use std::ops::Range;

// PHYSICAL
/// Pairs closer than this exert no force on each other.
pub const GRAVITY_EPSILON: f32 = 0.1;
/// Fraction of approach speed kept as separation speed after a collision.
pub const RESTITUTION: f32 = 0.8;
/// Mass assumed for the anchor when computing circular orbit speeds.
/// Not read from the actual central body.
pub const ANCHOR_MASS: f32 = 1000.0;
/// `mass = radius^3 * DENSITY`
pub const DENSITY: f32 = 10.0;
/// Substitute contact direction when two centers coincide exactly.
pub const COINCIDENT_AXIS: [f32; 3] = [0.001, 0.0, 0.0];
/// Vertical orbit velocity is damped by this factor to keep inclined orbits tame.
pub const VERTICAL_DAMPING: f32 = 0.1;

// SIMULATION
/// Rate of the visual clock relative to the physical delta.
pub const VISUAL_TIME_RATE: f32 = 0.5;
/// Gravity strength used by the fixed-parameter orbit variant.
pub const EXPLICIT_GRAVITY: f32 = 1.0;

// CENTRAL BODY
pub const SUN_RADIUS: f32 = 1.5;
pub const SUN_MASS: f32 = 1000.0;
pub const SUN_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// SAMPLING
pub const ORBIT_DISTANCE_RANGE: Range<f32> = 3.0..15.0;
pub const ORBIT_ANGLE_RANGE: Range<f32> = 0.0..std::f32::consts::TAU;
pub const ORBIT_INCLINATION_RANGE: Range<f32> = -0.3..0.3;
pub const EXPLICIT_INCLINATION_RANGE: Range<f32> = -0.2..0.2;
pub const RANDOM_RADIUS_RANGE: Range<f32> = 0.2..0.6;
