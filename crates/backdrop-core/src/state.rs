//! Camera and viewport state shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The frontend feeds
//! them pointer/resize input and reads back view and projection matrices.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_SMOOTHING, CAMERA_SWAY, CAMERA_Z,
};
use crate::error::SceneError;
use glam::{Mat4, Vec2, Vec3};

/// Size of the host viewport in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self, SceneError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(SceneError::DegenerateViewport { width, height });
        }
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Like [`Viewport::new`] but never fails: empty or non-finite sides
    /// become 1 CSS pixel. Used at startup, when a hidden or collapsed
    /// window can still report a zero size.
    pub fn clamped(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let side = |v: f32| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
        let (width, height) = (side(width), side(height));
        Self::new(width, height, pixel_ratio).unwrap_or(Self {
            width,
            height,
            pixel_ratio: 1.0,
        })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Render surface size in physical pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio) as u32;
        let h = (self.height * self.pixel_ratio) as u32;
        (w.max(1), h.max(1))
    }
}

/// Right-handed perspective camera that always looks at `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Mouse-follow state: the pointer writes `target`, each tick eases
/// `current` toward it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    pub target: Vec2,
    pub current: Vec2,
}

impl CameraState {
    /// First-order low-pass step toward the target.
    #[inline]
    pub fn smooth(&mut self) {
        self.current += (self.target - self.current) * CAMERA_SMOOTHING;
    }

    /// Camera eye derived from the current rotation.
    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.current.x * CAMERA_SWAY,
            self.current.y * CAMERA_SWAY,
            CAMERA_Z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_rejects_empty_sizes() {
        assert!(Viewport::new(0.0, 600.0, 1.0).is_err());
        assert!(Viewport::new(800.0, -1.0, 1.0).is_err());
        assert!(Viewport::new(f32::NAN, 600.0, 1.0).is_err());
    }

    #[test]
    fn clamped_viewport_survives_zero_sizes() {
        let v = Viewport::clamped(1280.0, 0.0, 2.0);
        assert_eq!(v, Viewport::new(1280.0, 1.0, 2.0).unwrap());
        assert!(v.aspect().is_finite());
        let v = Viewport::clamped(f32::NAN, -3.0, f32::INFINITY);
        assert_eq!((v.width, v.height, v.pixel_ratio), (1.0, 1.0, 1.0));
        assert_eq!(v.backing_size(), (1, 1));
        let v = Viewport::clamped(800.0, 600.0, 1.5);
        assert_eq!(v, Viewport::new(800.0, 600.0, 1.5).unwrap());
    }

    #[test]
    fn viewport_falls_back_to_unit_pixel_ratio() {
        let v = Viewport::new(800.0, 600.0, 0.0).unwrap();
        assert_eq!(v.pixel_ratio, 1.0);
        assert_eq!(v.backing_size(), (800, 600));
    }

    #[test]
    fn backing_size_scales_with_pixel_ratio() {
        let v = Viewport::new(640.0, 480.0, 2.0).unwrap();
        assert_eq!(v.backing_size(), (1280, 960));
    }

    #[test]
    fn camera_state_eye_scales_rotation() {
        let s = CameraState {
            target: Vec2::ZERO,
            current: Vec2::new(0.5, -0.25),
        };
        assert_eq!(s.eye(), Vec3::new(10.0, -5.0, CAMERA_Z));
    }

    #[test]
    fn view_projection_maps_origin_to_screen_centre() {
        let cam = Camera::new(4.0 / 3.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
