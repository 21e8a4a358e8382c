//! ASCII Donut - a software rasterizer that renders a spinning torus
//! to the terminal.
//!
//! The surface is swept by two parameter angles, rotated in 3D, projected
//! with a simple perspective divide, depth-tested against a per-frame
//! z-buffer, and shaded by mapping an estimated luminance onto a fixed
//! glyph palette.

pub mod config;
pub mod palette;
pub mod renderer;
pub mod terminal;

pub use config::TorusConfig;
pub use palette::Palette;
pub use renderer::{Frame, Renderer};
pub use terminal::TerminalDisplay;

/// Glyph ramp from dim to bright used to shade the torus surface
pub const ILLUMINATION: &str = ".,-~:;=!*#$@";

/// Per-frame increment of the rotation about the x axis
pub const A_STEP: f32 = 0.07;

/// Per-frame increment of the rotation about the z axis
pub const B_STEP: f32 = 0.02;
