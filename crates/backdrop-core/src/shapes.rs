use crate::color::hex_to_rgb;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::geometry::{self, WireMesh};
use crate::particles::euler_xyz;
use glam::{DVec3, Mat4, Vec3};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Torus,
    Octahedron,
    Icosahedron,
    Tetrahedron,
}

impl ShapeKind {
    /// Creation order; a shape's index in this list is its phase offset and
    /// scroll-depth multiplier.
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Torus,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Tetrahedron,
    ];

    pub fn wire_mesh(self) -> WireMesh {
        match self {
            ShapeKind::Torus => geometry::torus(
                SHAPE_RADIUS,
                TORUS_TUBE,
                TORUS_RADIAL_SEGMENTS,
                TORUS_TUBULAR_SEGMENTS,
            ),
            ShapeKind::Octahedron => geometry::octahedron(SHAPE_RADIUS),
            ShapeKind::Icosahedron => geometry::icosahedron(SHAPE_RADIUS),
            ShapeKind::Tetrahedron => geometry::tetrahedron(SHAPE_RADIUS),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub position: Vec3,
    /// Accumulated Euler angles, f64 for the same reason as the particle field.
    pub rotation: DVec3,
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    /// Sampled at build time but not read by the bobbing formula.
    pub float_range: f32,
    pub color: [f32; 3],
    pub opacity: f32,
}

impl FloatingShape {
    pub fn random<R: Rng + ?Sized>(
        kind: ShapeKind,
        index: usize,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Self {
        let mut spin = || (rng.gen::<f32>() - 0.5) * 2.0 * config.shape_spin_max;
        let rotation_speed = Vec3::new(spin(), spin(), spin());
        let float_speed = config.float_speed_min + rng.gen::<f32>() * config.float_speed_span;
        let float_range = config.float_range_min + rng.gen::<f32>() * config.float_range_span;
        let color = if index % 2 == 0 {
            hex_to_rgb(SHAPE_EVEN_COLOR)
        } else {
            hex_to_rgb(SHAPE_ODD_COLOR)
        };
        Self {
            kind,
            position: shape_position(index),
            rotation: DVec3::ZERO,
            rotation_speed,
            float_speed,
            float_range,
            color,
            opacity: SHAPE_OPACITY,
        }
    }

    /// One tick of spin and bobbing. `phase` is the shape's list index.
    #[inline]
    pub fn advance(&mut self, elapsed_secs: f64, phase: usize) {
        self.rotation += self.rotation_speed.as_dvec3();
        let arg = elapsed_secs * self.float_speed as f64 + phase as f64;
        self.position.y += (arg.sin() * SHAPE_BOB_AMPLITUDE as f64) as f32;
    }

    /// Translation after `XYZ` Euler rotation, as a three.js mesh composes it.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * euler_xyz(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_parameters_respect_ranges() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
            let s = FloatingShape::random(kind, i, &cfg, &mut rng);
            assert!(s.rotation_speed.abs().max_element() <= 0.01);
            assert!(s.float_speed >= 0.005 && s.float_speed < 0.015 + 1e-6);
            assert!(s.float_range >= 5.0 && s.float_range < 15.0 + 1e-5);
            assert_eq!(s.position, shape_position(i));
            assert_eq!(s.rotation, DVec3::ZERO);
        }
    }

    #[test]
    fn colors_alternate_between_cyan_and_magenta() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let even = FloatingShape::random(ShapeKind::Torus, 0, &cfg, &mut rng);
        let odd = FloatingShape::random(ShapeKind::Octahedron, 1, &cfg, &mut rng);
        assert_eq!(even.color, hex_to_rgb(0x00f5ff));
        assert_eq!(odd.color, hex_to_rgb(0xff00ff));
    }

    #[test]
    fn advance_spins_and_bobs() {
        let cfg = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(5);
        let mut s = FloatingShape::random(ShapeKind::Icosahedron, 2, &cfg, &mut rng);
        let y0 = s.position.y;
        s.advance(10.0, 2);
        let expected = (10.0 * s.float_speed as f64 + 2.0).sin() * 0.02;
        assert!((s.position.y - y0 - expected as f32).abs() < 1e-5);
        assert_eq!(s.rotation, s.rotation_speed.as_dvec3());
    }

    #[test]
    fn spin_keeps_advancing_at_large_angles() {
        let cfg = SceneConfig::default();
        let mut s = FloatingShape::random(ShapeKind::Torus, 0, &cfg, &mut StdRng::seed_from_u64(9));
        s.rotation_speed = Vec3::new(0.01, -0.01, 0.005);
        s.rotation = DVec3::new(131072.0, -65536.0, 16384.0);
        let before = s.rotation;
        s.advance(0.0, 0);
        let step = s.rotation - before;
        assert!((step - s.rotation_speed.as_dvec3()).abs().max_element() < 1e-9);
    }

    #[test]
    fn model_matrix_rotates_then_translates() {
        let cfg = SceneConfig::default();
        let mut s = FloatingShape::random(ShapeKind::Octahedron, 1, &cfg, &mut StdRng::seed_from_u64(2));
        let half_pi = std::f64::consts::FRAC_PI_2;
        s.rotation = DVec3::new(half_pi, half_pi, 0.0);
        let p = s.model_matrix().transform_point3(Vec3::X);
        assert!((p - (s.position + Vec3::Y)).length() < 1e-5, "{p:?}");
    }
}
