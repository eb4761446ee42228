use std::f32::consts::FRAC_PI_2;

use cgmath::{Deg, EuclideanSpace, Matrix4, Point3, Vector2, Vector3, Vector4};

use crate::snapshot::BodyInstance;

const DRAG_SENSITIVITY: f32 = 0.01;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 50.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.1;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct CameraPreset {
    pub name: &'static str,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

pub const CAMERA_PRESETS: [CameraPreset; 3] = [
    CameraPreset {
        name: "Default",
        distance: 20.0,
        pitch: 0.3,
        yaw: 0.0,
    },
    CameraPreset {
        name: "Top down",
        distance: 30.0,
        pitch: PITCH_LIMIT,
        yaw: 0.0,
    },
    CameraPreset {
        name: "Edge on",
        distance: 25.0,
        pitch: 0.0,
        yaw: 0.0,
    },
];

/// A body projected to normalized device coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Projected {
    pub ndc: Vector2<f32>,
    /// Radius in NDC units along the vertical axis.
    pub radius: f32,
    /// Distance from the eye, for back-to-front ordering.
    pub depth: f32,
}

/// Orbits the origin at a fixed distance, looking at it.
pub struct Camera {
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub fovy: Deg<f32>,
    pub aspect: f32,
    matrix: Matrix4<f32>,
    changed: bool,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let preset = CAMERA_PRESETS[0];
        Self {
            distance: preset.distance,
            pitch: preset.pitch,
            yaw: preset.yaw,
            fovy: Deg(45.0),
            aspect: width / height,
            matrix: Matrix4::from_scale(1.0),
            changed: true,
        }
    }

    pub fn eye(&self) -> Point3<f32> {
        Point3::new(
            self.distance * self.yaw.sin() * self.pitch.cos(),
            self.distance * self.pitch.sin(),
            self.distance * self.yaw.cos() * self.pitch.cos(),
        )
    }

    pub fn flush_if_needed(&mut self) {
        if !self.changed {
            return;
        }
        self.matrix = self.build_view_projection_matrix();
        self.changed = false;
    }

    fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(self.eye(), Point3::origin(), Vector3::unit_y());
        let proj = cgmath::perspective(self.fovy, self.aspect, Z_NEAR, Z_FAR);
        proj * view
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if height <= 0.0 {
            return;
        }
        let aspect = width / height;
        if aspect != self.aspect {
            self.aspect = aspect;
            self.changed = true;
        }
    }

    /// Rotate around the origin by a pointer drag, in pixels.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch = (self.pitch + dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.changed = true;
    }

    /// Move towards the origin by `amount`; negative moves away.
    pub fn zoom(&mut self, amount: f32) {
        if amount == 0.0 {
            return;
        }
        self.distance = (self.distance - amount).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.changed = true;
    }

    pub fn apply_preset(&mut self, preset: &CameraPreset) {
        self.distance = preset.distance;
        self.pitch = preset.pitch;
        self.yaw = preset.yaw;
        self.changed = true;
    }

    /// `None` when the body is behind the eye or outside the depth range.
    pub fn project(&mut self, instance: &BodyInstance) -> Option<Projected> {
        self.flush_if_needed();

        let [x, y, z] = instance.position;
        let clip = self.matrix * Vector4::new(x, y, z, 1.0);
        if clip.w <= Z_NEAR || clip.w >= Z_FAR {
            return None;
        }
        let focal = 1.0 / (self.fovy.0.to_radians() / 2.0).tan();
        Some(Projected {
            ndc: Vector2::new(clip.x / clip.w, clip.y / clip.w),
            radius: instance.radius * focal / clip.w,
            depth: clip.w,
        })
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Point3, Vector3, Vector4};

    use super::*;
    use crate::Body;

    fn instance_at(x: f32, y: f32, z: f32) -> BodyInstance {
        let body = Body::new(
            1.0,
            Vector4::new(1.0, 1.0, 1.0, 1.0),
            Point3::new(x, y, z),
            Vector3::new(0.0, 0.0, 0.0),
            1.0,
        );
        BodyInstance::new(&body, false)
    }

    #[test]
    fn default_eye_is_twenty_units_out() {
        let camera = Camera::new(800.0, 600.0);
        let eye = camera.eye();
        assert!(((eye - Point3::origin()).magnitude() - 20.0).abs() < 1e-4);
        assert!(eye.y > 0.0);
    }

    #[test]
    fn origin_projects_to_center() {
        let mut camera = Camera::new(800.0, 600.0);
        let p = camera.project(&instance_at(0.0, 0.0, 0.0)).unwrap();
        assert!(p.ndc.x.abs() < 1e-5 && p.ndc.y.abs() < 1e-5);
        assert!((p.depth - 20.0).abs() < 1e-3);
        assert!(p.radius > 0.0);
    }

    #[test]
    fn points_behind_eye_are_culled() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.apply_preset(&CAMERA_PRESETS[2]);
        assert!(camera.project(&instance_at(0.0, 0.0, 40.0)).is_none());
    }

    #[test]
    fn zoom_and_pitch_are_clamped() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.zoom(100.0);
        assert_eq!(camera.distance, 5.0);
        camera.zoom(-100.0);
        assert_eq!(camera.distance, 50.0);
        camera.drag(0.0, 1e4);
        assert!((camera.pitch - PITCH_LIMIT).abs() < 1e-6);
    }
}
