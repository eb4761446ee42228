use crate::Body;

/// Read-only view of one body, laid out for direct upload to a vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
    dominant: u32,
    _pad: [u32; 3],
}

impl BodyInstance {
    pub fn new(body: &Body, is_dominant: bool) -> Self {
        Self {
            position: body.position().into(),
            radius: body.radius(),
            color: body.color().into(),
            dominant: is_dominant as u32,
            _pad: [0; 3],
        }
    }

    /// True only for the body at index 0, which renderers treat as the light source.
    pub fn is_dominant(&self) -> bool {
        self.dominant != 0
    }
}
