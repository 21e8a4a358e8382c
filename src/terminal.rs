//! Terminal display sink
//!
//! Takes completed frames and writes them to the terminal. The renderer
//! itself never touches I/O; this is the only module that does.

use crate::renderer::Frame;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, BufWriter, Stdout, Write, stdout};

/// Terminal display handler with buffered output
pub struct TerminalDisplay {
    buffer: BufWriter<Stdout>,
}

impl TerminalDisplay {
    pub fn new() -> io::Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        execute!(stdout, Clear(ClearType::All))?;

        Ok(Self {
            buffer: BufWriter::new(stdout),
        })
    }

    /// Write one frame with per-row cursor positioning and flush once.
    ///
    /// Explicit positioning keeps rows aligned even if the grid is wider
    /// than the terminal window.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        for (i, row) in frame.rows().enumerate() {
            queue!(self.buffer, MoveTo(0, i as u16))?;
            for (j, glyph) in row.iter().enumerate() {
                if j > 0 {
                    self.buffer.write_all(b" ")?;
                }
                let mut encoded = [0u8; 4];
                self.buffer.write_all(glyph.encode_utf8(&mut encoded).as_bytes())?;
            }
        }
        self.buffer.flush()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = self.buffer.flush();
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
    }
}
