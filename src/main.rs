//! ASCII Donut - renders a spinning torus to the terminal.
//!
//! The driver owns the two rotation angles, advancing them by a fixed step
//! between frames; rendering itself is a pure function of the angles.

use ascii_donut::renderer::Renderer;
use ascii_donut::terminal::TerminalDisplay;
use ascii_donut::{TorusConfig, A_STEP, B_STEP};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Delay between frames to cap the animation speed
const FRAME_DELAY: Duration = Duration::from_millis(20);

fn main() {
    env_logger::init();

    let config = match TorusConfig::new(1.0, 2.0, 40, 0.07, 0.02, 5.0) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "rendering {size}x{size} torus, radii ({r1}, {r2})",
        size = config.screen_size,
        r1 = config.tube_radius,
        r2 = config.ring_radius,
    );

    let renderer = Renderer::new(config);

    let mut terminal = match TerminalDisplay::new() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {e}");
            std::process::exit(1);
        }
    };

    let mut a = 0.0f32;
    let mut b = 0.0f32;

    for _ in 0..config.screen_size * config.screen_size {
        a += A_STEP;
        b += B_STEP;

        let started = Instant::now();
        let frame = renderer.render(a, b);
        debug!("frame rendered in {:?}", started.elapsed());

        if let Err(e) = terminal.draw(&frame) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                break;
            }
            eprintln!("Render error: {e}");
            std::process::exit(1);
        }

        std::thread::sleep(FRAME_DELAY);
    }
}
