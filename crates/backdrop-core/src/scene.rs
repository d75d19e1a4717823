//! Scene context: construction, per-frame update and input handling.
//!
//! A [`Scene`] owns every piece of mutable backdrop state. The web frontend
//! keeps one behind an `Rc<RefCell<_>>` and calls [`Scene::tick`] from its
//! animation-frame callback and the `on_*` methods from event listeners; tests
//! drive the same methods directly.

use crate::color::hex_to_rgb;
use crate::config::SceneConfig;
use crate::constants::{FOG_COLOR, FOG_DENSITY, PARTICLE_SPIN_X, PARTICLE_SPIN_Y};
use crate::error::SceneError;
use crate::input;
use crate::lights::LightRig;
use crate::particles::PointCloud;
use crate::shapes::{FloatingShape, ShapeKind};
use crate::state::{Camera, CameraState, Viewport};
use rand::Rng;

/// Exponential-squared distance fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: hex_to_rgb(FOG_COLOR),
            density: FOG_DENSITY,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub particles: PointCloud,
    pub shapes: Vec<FloatingShape>,
    pub lights: LightRig,
    pub fog: Fog,
    pub camera: Camera,
    pub camera_state: CameraState,
    pub viewport: Viewport,
    frames: u64,
}

impl Scene {
    /// Build the scene once. All randomness is drawn from `rng` here and
    /// nowhere else.
    pub fn build<R: Rng + ?Sized>(
        viewport: Viewport,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        let particles = PointCloud::random(config, &mut *rng);
        let shapes: Vec<FloatingShape> = ShapeKind::ALL
            .into_iter()
            .enumerate()
            .map(|(i, kind)| FloatingShape::random(kind, i, config, &mut *rng))
            .collect();
        let lights = LightRig::default();
        log::info!(
            "[scene] particles={} shapes={} lights={} viewport={}x{}",
            particles.len(),
            shapes.len(),
            lights.count(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            particles,
            shapes,
            lights,
            fog: Fog::default(),
            camera: Camera::new(viewport.aspect()),
            camera_state: CameraState::default(),
            viewport,
            frames: 0,
        })
    }

    /// Advance the animation by one display refresh. `elapsed_secs` is
    /// measured from a fixed monotonic epoch.
    pub fn tick(&mut self, elapsed_secs: f64) {
        self.particles.rotation.y += PARTICLE_SPIN_Y;
        self.particles.rotation.x += PARTICLE_SPIN_X;

        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.advance(elapsed_secs, i);
        }

        self.camera_state.smooth();
        self.camera.eye = self.camera_state.eye();
        self.frames += 1;
    }

    /// Number of ticks applied since construction.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn on_pointer_move(&mut self, px: f32, py: f32) {
        self.camera_state.target = input::pointer_to_ndc(px, py, &self.viewport);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }

    pub fn on_scroll(&mut self, offset: f32) {
        self.particles.rotation.z = f64::from(input::scroll_particle_spin(offset));
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.position.z = input::scroll_shape_depth(offset, i);
        }
    }
}
