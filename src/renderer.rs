//! Software rasterizer for the torus surface
//!
//! Each frame sweeps the two surface parameter angles over a full turn,
//! rotates the resulting points into viewer space, projects them onto the
//! square character grid, and composites them through a z-buffer so nearer
//! samples occlude farther ones.

use crate::config::TorusConfig;
use crate::palette::Palette;
use nalgebra::{Matrix3, Rotation3, Vector3};
use rayon::prelude::*;
use std::f32::consts::TAU;
use std::fmt;

/// A completed glyph grid for one frame.
///
/// Row-major, always `size x size`; cells hold either the blank glyph or a
/// palette glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: usize,
    cells: Vec<char>,
}

impl Frame {
    fn blank(size: usize, glyph: char) -> Self {
        Self {
            size,
            cells: vec![glyph; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> char {
        self.cells[y * self.size + x]
    }

    fn set(&mut self, x: usize, y: usize, glyph: char) {
        self.cells[y * self.size + x] = glyph;
    }

    /// Iterate over the rows of the grid, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.size)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, glyph) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{glyph}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// One lit surface point that survived projection and the horizon guard
#[derive(Debug, Clone, Copy)]
struct Sample {
    xp: usize,
    yp: usize,
    ooz: f32,
    level: usize,
}

/// The torus frame renderer.
///
/// Holds the immutable configuration and the sweep-angle trig tables, which
/// depend only on the fixed step sizes and are computed once.
pub struct Renderer {
    config: TorusConfig,
    palette: Palette,
    /// (sin, cos) per tube cross-section angle
    theta: Vec<(f32, f32)>,
    /// (sin, cos) per ring angle
    phi: Vec<(f32, f32)>,
}

impl Renderer {
    pub fn new(config: TorusConfig) -> Self {
        Self {
            theta: trig_table(config.theta_step),
            phi: trig_table(config.phi_step),
            palette: Palette::default(),
            config,
        }
    }

    pub fn config(&self) -> &TorusConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render one frame for rotations `a` (about x) and `b` (about z).
    ///
    /// Pure with respect to its inputs: identical angles always produce an
    /// identical frame. Samples are visited cross-section-major in table
    /// order, and the depth test is strictly-greater, so the first sample
    /// processed at a given depth wins any exact tie.
    pub fn render(&self, a: f32, b: f32) -> Frame {
        let spins = self.spin_matrices(a, b);
        let mut frame = Frame::blank(self.config.screen_size, self.palette.blank());
        let mut zbuffer = vec![0.0f32; self.config.screen_size * self.config.screen_size];

        for &(sin_t, cos_t) in &self.theta {
            for spin in &spins {
                if let Some(sample) = self.sample(spin, sin_t, cos_t) {
                    self.composite(&mut frame, &mut zbuffer, sample);
                }
            }
        }

        frame
    }

    /// Parallel variant of [`render`](Self::render).
    ///
    /// Cross-section sweeps are sampled on the rayon pool, then composited
    /// sequentially in sweep order, which reproduces the sequential
    /// tie-break exactly; the two methods return identical frames.
    pub fn render_parallel(&self, a: f32, b: f32) -> Frame {
        let spins = self.spin_matrices(a, b);
        let rows: Vec<Vec<Sample>> = self
            .theta
            .par_iter()
            .map(|&(sin_t, cos_t)| {
                spins
                    .iter()
                    .filter_map(|spin| self.sample(spin, sin_t, cos_t))
                    .collect()
            })
            .collect();

        let mut frame = Frame::blank(self.config.screen_size, self.palette.blank());
        let mut zbuffer = vec![0.0f32; self.config.screen_size * self.config.screen_size];
        for row in rows {
            for sample in row {
                self.composite(&mut frame, &mut zbuffer, sample);
            }
        }

        frame
    }

    /// Combined rotation per ring angle: frame rotation applied after the
    /// sweep around the ring axis. Recomputed per frame since it depends on
    /// the rotation angles.
    fn spin_matrices(&self, a: f32, b: f32) -> Vec<Matrix3<f32>> {
        let frame_rot = (Rotation3::from_axis_angle(&Vector3::z_axis(), b)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), a))
        .into_inner();

        self.phi
            .iter()
            .map(|&(sin_p, cos_p)| {
                // Ring rotation about y, oriented so the tube's +x face
                // sweeps toward +z
                let ring = Matrix3::new(
                    cos_p, 0.0, -sin_p, //
                    0.0, 1.0, 0.0, //
                    sin_p, 0.0, cos_p,
                );
                frame_rot * ring
            })
            .collect()
    }

    /// Transform, project, and shade one surface point.
    ///
    /// Returns `None` when the point projects outside the grid (expected
    /// near the horizon) or faces away from the light (unlit samples never
    /// touch the buffers).
    fn sample(&self, spin: &Matrix3<f32>, sin_t: f32, cos_t: f32) -> Option<Sample> {
        let size = self.config.screen_size;
        let half = size as f32 / 2.0;

        let circle_x = self.config.ring_radius + self.config.tube_radius * cos_t;
        let circle_y = self.config.tube_radius * sin_t;

        let point = spin * Vector3::new(circle_x, circle_y, 0.0);
        // Camera distance exceeds the torus extent, so z stays positive
        let z = self.config.camera_distance + point.z;
        let ooz = 1.0 / z;

        let xp = (half + self.config.k1() * ooz * point.x) as i32;
        let yp = (half - self.config.k1() * ooz * point.y) as i32;
        if xp < 0 || xp >= size as i32 || yp < 0 || yp >= size as i32 {
            return None;
        }

        let normal = spin * Vector3::new(cos_t, sin_t, 0.0);
        let level = (normal.dot(&light_dir()) * 8.0).round() as i32;
        if level < 0 {
            return None;
        }

        Some(Sample {
            xp: xp as usize,
            yp: yp as usize,
            ooz,
            level: level as usize,
        })
    }

    /// Depth-tested write: strictly nearer samples overwrite, ties keep the
    /// earlier sample.
    fn composite(&self, frame: &mut Frame, zbuffer: &mut [f32], sample: Sample) {
        let idx = sample.yp * self.config.screen_size + sample.xp;
        if sample.ooz > zbuffer[idx] {
            zbuffer[idx] = sample.ooz;
            frame.set(sample.xp, sample.yp, self.palette.glyph(sample.level));
        }
    }
}

/// Fixed light direction; magnitude sqrt(2) combined with the x8 luminance
/// scale keeps the maximum level within a 12-glyph palette
fn light_dir() -> Vector3<f32> {
    Vector3::new(0.0, 1.0, -1.0)
}

/// (sin, cos) for every multiple of `step` below a full turn
fn trig_table(step: f32) -> Vec<(f32, f32)> {
    let count = (TAU / step).ceil() as usize;
    (0..count)
        .map(|i| {
            let angle = i as f32 * step;
            (angle.sin(), angle.cos())
        })
        .collect()
}
