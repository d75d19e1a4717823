use crate::color::hex_to_rgb;
use crate::constants::{AMBIENT_COLOR, AMBIENT_INTENSITY};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Point light whose contribution falls to zero at `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: AmbientLight,
    pub points: [PointLight; 3],
}

impl LightRig {
    pub fn count(&self) -> usize {
        1 + self.points.len()
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: AmbientLight {
                color: hex_to_rgb(AMBIENT_COLOR),
                intensity: AMBIENT_INTENSITY,
            },
            points: [
                PointLight {
                    color: hex_to_rgb(0x00f5ff),
                    intensity: 2.0,
                    range: 100.0,
                    position: Vec3::new(50.0, 50.0, 50.0),
                },
                PointLight {
                    color: hex_to_rgb(0xff00ff),
                    intensity: 2.0,
                    range: 100.0,
                    position: Vec3::new(-50.0, -50.0, 50.0),
                },
                PointLight {
                    color: hex_to_rgb(0x00ffff),
                    intensity: 1.5,
                    range: 80.0,
                    position: Vec3::new(0.0, 50.0, -50.0),
                },
            ],
        }
    }
}
