use std::io::{self, Write};

use super::LineFrame;

const CLEAR_TO_END_OF_LINE: &str = "\x1b[K";

/// Redraws a single terminal line in place.
pub struct TerminalDisplay<Wr: Write> {
    out: Wr,
    frames_flushed: u64,
}

impl<Wr: Write> TerminalDisplay<Wr> {
    pub fn new(out: Wr) -> Self {
        Self {
            out,
            frames_flushed: 0,
        }
    }

    pub fn flush_frame(&mut self, frame: &LineFrame) -> io::Result<()> {
        write!(self.out, "\r{}{}", frame.as_str(), CLEAR_TO_END_OF_LINE)?;
        self.out.flush()?;
        self.frames_flushed = self.frames_flushed.saturating_add(1);
        Ok(())
    }

    /// Leave the cursor on a fresh line.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn frames_flushed(&self) -> u64 {
        self.frames_flushed
    }

    pub fn into_inner(self) -> Wr {
        self.out
    }
}
