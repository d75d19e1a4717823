use crate::constants::{SCROLL_PARTICLE_SPIN_Z, SCROLL_SHAPE_BASE_Z, SCROLL_SHAPE_DEPTH_RATE};
use crate::state::Viewport;
use glam::Vec2;

/// Map pointer pixel coordinates to normalized device coordinates in
/// `[-1, 1]`, with y increasing upward.
#[inline]
pub fn pointer_to_ndc(px: f32, py: f32, viewport: &Viewport) -> Vec2 {
    Vec2::new(
        (px / viewport.width) * 2.0 - 1.0,
        -((py / viewport.height) * 2.0 - 1.0),
    )
}

/// Particle z-rotation for a vertical scroll offset.
#[inline]
pub fn scroll_particle_spin(offset: f32) -> f32 {
    offset * SCROLL_PARTICLE_SPIN_Z
}

/// Shape depth for a scroll offset; higher indices recede faster.
#[inline]
pub fn scroll_shape_depth(offset: f32, index: usize) -> f32 {
    SCROLL_SHAPE_BASE_Z + offset * SCROLL_SHAPE_DEPTH_RATE * (index + 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_centre_map_to_ndc() {
        let vp = Viewport::new(1024.0, 768.0, 1.0).unwrap();
        assert_eq!(pointer_to_ndc(0.0, 0.0, &vp), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(1024.0, 768.0, &vp), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(512.0, 384.0, &vp), Vec2::ZERO);
    }

    #[test]
    fn scroll_depth_grows_with_index() {
        assert_eq!(scroll_shape_depth(0.0, 3), -30.0);
        let d0 = scroll_shape_depth(1000.0, 0);
        let d3 = scroll_shape_depth(1000.0, 3);
        assert!((d0 - (-20.0)).abs() < 1e-4);
        assert!((d3 - 10.0).abs() < 1e-4);
    }
}
