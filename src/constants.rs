// Render and page-integration constants for the web frontend.

// DOM
pub const CONTAINER_ID: &str = "canvas-container"; // host element for the canvas
pub const LOADED_CLASS: &str = "loaded"; // added to <body> once the page has loaded

// Antialiasing
pub const MSAA_SAMPLES: u32 = 4;

// Transparent clear so the page background shows through
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];

// Per-point size multiplier; point sizes are already in world units
pub const POINT_SIZE_SCALE: f32 = 1.0;

// Upper bound on frame latency requested from the surface
pub const MAX_FRAME_LATENCY: u32 = 2;
