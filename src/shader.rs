use bytemuck::{Pod, Zeroable};

use crate::canvas::{Circle, Color};

pub const SHADER_SOURCE: &str = include_str!("shader.wgsl");

/// One disc on screen, laid out for the instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32,
        2 => Float32x4
    ];

    /// `linear` converts the colour for an sRGB render target.
    pub fn from_circle(circle: &Circle, linear: bool) -> Self {
        let color = if linear { circle.color.to_linear() } else { circle.color };
        Self {
            center: circle.center.to_array(),
            radius: circle.radius,
            color: color.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

pub fn clear_color(color: Color, linear: bool) -> wgpu::Color {
    let c = if linear { color.to_linear() } else { color };
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    /// Validates WGSL code using naga.
    fn validate_wgsl(code: &str) -> Result<(), String> {
        let module = naga::front::wgsl::parse_str(code)
            .map_err(|e| format!("WGSL parse error: {:?}", e))?;

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .map_err(|e| format!("WGSL validation error: {:?}", e))?;

        Ok(())
    }

    #[test]
    fn test_point_shader_validates() {
        validate_wgsl(SHADER_SOURCE).expect("point shader should be valid");
    }

    #[test]
    fn test_shader_entry_points() {
        assert!(SHADER_SOURCE.contains("fn vs_main"));
        assert!(SHADER_SOURCE.contains("fn fs_main"));
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 28);
        assert_eq!(CircleInstance::ATTRIBUTES[1].offset, 8);
        assert_eq!(CircleInstance::ATTRIBUTES[2].offset, 12);
        assert_eq!(std::mem::size_of::<Uniforms>(), 16);
    }

    #[test]
    fn test_instance_from_circle() {
        let circle = Circle {
            center: Vec2::new(0.25, 0.75),
            radius: 2.0,
            color: Color::WHITE,
        };
        let instance = CircleInstance::from_circle(&circle, false);
        assert_eq!(instance.center, [0.25, 0.75]);
        assert_eq!(instance.radius, 2.0);
        assert_eq!(instance.color, [1.0, 1.0, 1.0, 1.0]);
    }
}
