use crate::color::hsl_to_rgb;
use crate::config::SceneConfig;
use crate::constants::{PARTICLE_LIGHTNESS, PARTICLE_SATURATION};
use glam::{DVec3, Mat4, Vec3};
use rand::Rng;

/// Particle field. Only `rotation` changes after construction.
#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
    /// Accumulated Euler angles in radians. Kept in f64 so a per-tick
    /// increment of 0.0008 still lands after days of ticking.
    pub rotation: DVec3,
}

impl PointCloud {
    pub fn random<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        let n = config.particle_count;
        let mut positions = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);
        for _ in 0..n {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * config.cube_size,
                (rng.gen::<f32>() - 0.5) * config.cube_size,
                (rng.gen::<f32>() - 0.5) * config.cube_size,
            ));
            let hue = config.hue_min + rng.gen::<f32>() * config.hue_span;
            colors.push(hsl_to_rgb(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS));
            sizes.push(config.size_min + rng.gen::<f32>() * config.size_span);
        }
        Self {
            positions,
            colors,
            sizes,
            rotation: DVec3::ZERO,
        }
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Model matrix for the whole field in three.js `XYZ` Euler order.
    pub fn model_matrix(&self) -> Mat4 {
        euler_xyz(self.rotation)
    }
}

/// `Rx * Ry * Rz` for accumulated angles. Each angle is wrapped into
/// [0, 2π) in f64 before narrowing to f32.
pub(crate) fn euler_xyz(angles: DVec3) -> Mat4 {
    let wrap = |v: f64| v.rem_euclid(std::f64::consts::TAU) as f32;
    let a = Vec3::new(wrap(angles.x), wrap(angles.y), wrap(angles.z));
    Mat4::from_rotation_x(a.x) * Mat4::from_rotation_y(a.y) * Mat4::from_rotation_z(a.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn attributes_stay_within_configured_ranges() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let cloud = PointCloud::random(&cfg, &mut rng);
        assert_eq!(cloud.len(), cfg.particle_count);
        assert_eq!(cloud.colors.len(), cloud.len());
        assert_eq!(cloud.sizes.len(), cloud.len());
        let half = cfg.cube_size / 2.0;
        for p in &cloud.positions {
            assert!(p.abs().max_element() <= half);
        }
        for s in &cloud.sizes {
            assert!(*s >= 1.0 && *s < 3.0);
        }
        for c in &cloud.colors {
            assert!(c.iter().all(|v| (0.0..=1.0 + 1e-5).contains(v)));
            assert!(c[2] > 0.99, "blue channel saturated across the hue range");
        }
    }

    #[test]
    fn model_matrix_applies_x_after_y() {
        let mut cloud = PointCloud::random(&SceneConfig::default(), &mut StdRng::seed_from_u64(1));
        let half_pi = std::f64::consts::FRAC_PI_2;
        cloud.rotation = DVec3::new(half_pi, half_pi, 0.0);
        // Ry sends +X to -Z, then Rx sends -Z to +Y
        let v = cloud.model_matrix().transform_vector3(Vec3::X);
        assert!((v - Vec3::Y).length() < 1e-6, "{v:?}");
    }

    #[test]
    fn model_matrix_wraps_large_angles() {
        let mut cloud = PointCloud::random(&SceneConfig::default(), &mut StdRng::seed_from_u64(1));
        let turns = 2_000_000.0 * std::f64::consts::TAU;
        cloud.rotation = DVec3::new(0.0, turns + 0.5, 0.0);
        let expected = Mat4::from_rotation_y(0.5);
        assert!(cloud.model_matrix().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn same_seed_same_cloud() {
        let cfg = SceneConfig::default();
        let a = PointCloud::random(&cfg, &mut StdRng::seed_from_u64(3));
        let b = PointCloud::random(&cfg, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.sizes, b.sizes);
    }
}
