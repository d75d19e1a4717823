use glam::Vec3;

// Shared scene/animation tuning constants.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_CUBE_SIZE: f32 = 200.0; // side of the spawn cube centred on the origin
pub const PARTICLE_HUE_MIN: f32 = 0.5; // cyan
pub const PARTICLE_HUE_SPAN: f32 = 0.3; // up to magenta
pub const PARTICLE_SATURATION: f32 = 1.0;
pub const PARTICLE_LIGHTNESS: f32 = 0.5;
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const PARTICLE_OPACITY: f32 = 0.8;

// Per-tick particle spin (radians), f64 like the accumulated angles
pub const PARTICLE_SPIN_Y: f64 = 0.0008;
pub const PARTICLE_SPIN_X: f64 = PARTICLE_SPIN_Y * 0.5;

// Floating shapes
pub const SHAPE_COUNT: usize = 4;
pub const SHAPE_RADIUS: f32 = 5.0;
pub const TORUS_TUBE: f32 = 2.0;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;
pub const SHAPE_POSITIONS: [[f32; 3]; SHAPE_COUNT] = [
    [-40.0, 30.0, -30.0],
    [40.0, -30.0, -20.0],
    [-30.0, -40.0, -25.0],
    [35.0, 35.0, -35.0],
];
pub const SHAPE_SPIN_MAX: f32 = 0.01; // rotation speed per axis in [-max, max)
pub const SHAPE_FLOAT_SPEED_MIN: f32 = 0.005;
pub const SHAPE_FLOAT_SPEED_SPAN: f32 = 0.01;
pub const SHAPE_FLOAT_RANGE_MIN: f32 = 5.0;
pub const SHAPE_FLOAT_RANGE_SPAN: f32 = 10.0;
pub const SHAPE_BOB_AMPLITUDE: f32 = 0.02; // y offset added per tick
pub const SHAPE_OPACITY: f32 = 0.3;
pub const SHAPE_EVEN_COLOR: u32 = 0x00f5ff;
pub const SHAPE_ODD_COLOR: u32 = 0xff00ff;

// Scroll parallax
pub const SCROLL_PARTICLE_SPIN_Z: f32 = 0.0002;
pub const SCROLL_SHAPE_BASE_Z: f32 = -30.0;
pub const SCROLL_SHAPE_DEPTH_RATE: f32 = 0.01;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_SMOOTHING: f32 = 0.05; // fraction of the remaining gap closed per tick
pub const CAMERA_SWAY: f32 = 20.0; // world units per unit of rotation

// Lights
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.2;

// Fog
pub const FOG_COLOR: u32 = 0x0a0a0a;
pub const FOG_DENSITY: f32 = 0.002;

#[inline]
pub fn shape_position(index: usize) -> Vec3 {
    Vec3::from_array(SHAPE_POSITIONS[index % SHAPE_COUNT])
}
