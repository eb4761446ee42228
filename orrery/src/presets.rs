use std::f32::consts::PI;

use cgmath::{Point3, Vector3, Vector4};

use crate::{
    Body,
    constants::{SUN_COLOR, SUN_MASS, SUN_RADIUS},
    sampler::UnitSampler,
};

/// A planet placed by distance and angle rather than by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetParams {
    pub distance: f32,
    pub angle: f32,
    pub radius: f32,
    pub color: [f32; 4],
}

/// The anchor: at rest at the origin.
pub fn sun() -> Body {
    Body::new(
        SUN_RADIUS,
        SUN_COLOR.into(),
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 0.0),
        SUN_MASS,
    )
}

/// The planets every reset starts with.
pub fn default_planets() -> [PlanetParams; 5] {
    [
        PlanetParams {
            distance: 4.0,
            angle: 0.0,
            radius: 0.3,
            color: [0.2, 0.7, 0.9, 1.0],
        },
        PlanetParams {
            distance: 7.0,
            angle: PI / 3.0,
            radius: 0.4,
            color: [0.8, 0.4, 0.2, 1.0],
        },
        PlanetParams {
            distance: 10.0,
            angle: PI * 2.0 / 3.0,
            radius: 0.35,
            color: [0.3, 0.8, 0.3, 1.0],
        },
        PlanetParams {
            distance: 13.0,
            angle: PI,
            radius: 0.5,
            color: [0.9, 0.2, 0.2, 1.0],
        },
        PlanetParams {
            distance: 16.0,
            angle: PI * 4.0 / 3.0,
            radius: 0.25,
            color: [0.6, 0.6, 0.8, 1.0],
        },
    ]
}

/// Either a cool blue-green or a warm red, with even odds.
pub fn random_planet_color(sampler: &mut dyn UnitSampler) -> Vector4<f32> {
    if sampler.unit() > 0.5 {
        let blue = 0.5 + sampler.unit() * 0.5;
        let green = 0.3 + sampler.unit() * 0.7;
        Vector4::new(0.0, green, blue, 1.0)
    } else {
        let red = 0.7 + sampler.unit() * 0.3;
        let green = 0.2 + sampler.unit() * 0.3;
        Vector4::new(red, green, 0.1, 1.0)
    }
}
