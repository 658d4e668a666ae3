//! View model and animation metadata consumed by renderers.

use core::fmt;

use crate::cycler::Phase;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnimationKind {
    FadeIn,
    FadeOut,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationFrame {
    pub kind: AnimationKind,
    /// 0..=100
    pub progress_pct: u8,
}

impl AnimationFrame {
    /// Opacity in percent after applying the fade direction.
    pub const fn opacity_pct(self) -> u8 {
        match self.kind {
            AnimationKind::FadeIn => self.progress_pct,
            AnimationKind::FadeOut => 100 - self.progress_pct,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationSpec {
    pub kind: AnimationKind,
    pub start_ms: u64,
    pub duration_ms: u16,
}

impl AnimationSpec {
    pub const fn new(kind: AnimationKind, start_ms: u64, duration_ms: u16) -> Self {
        Self {
            kind,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(self, now_ms: u64) -> Option<AnimationFrame> {
        let duration = self.duration_ms.max(1) as u64;
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= duration {
            return None;
        }

        let progress = ((elapsed * 100) / duration).min(100) as u8;
        Some(AnimationFrame {
            kind: self.kind,
            progress_pct: progress,
        })
    }
}

/// Everything a renderer needs to draw one frame of the cycler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CyclerView<'a> {
    pub text: &'a str,
    pub cursor_glyph: char,
    pub cursor_visible: bool,
    pub cursor_fade: Option<AnimationFrame>,
    pub phase: Phase,
}

impl CyclerView<'_> {
    /// Cursor opacity in percent, honouring an in-flight fade.
    pub fn cursor_opacity_pct(&self) -> u8 {
        match self.cursor_fade {
            Some(frame) => frame.opacity_pct(),
            None if self.cursor_visible => 100,
            None => 0,
        }
    }
}

/// Text followed by the cursor glyph, or a blank of the same width when hidden.
impl fmt::Display for CyclerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)?;
        if self.cursor_visible {
            write!(f, "{}", self.cursor_glyph)
        } else {
            f.write_str(" ")
        }
    }
}
