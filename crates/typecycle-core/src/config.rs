//! Construction-time configuration for a text cycler.

use core::fmt;

pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;
pub const DEFAULT_DELETING_SPEED_MS: u32 = 50;
pub const DEFAULT_PAUSE_AFTER_TYPE_MS: u32 = 1_500;
pub const DEFAULT_CURSOR_GLYPH: char = '|';
pub const DEFAULT_CURSOR_BLINK_MS: u32 = 500;
pub const DEFAULT_CURSOR_FADE_MS: u16 = 100;

/// Per-character delays and phase dwell times.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CyclerTiming {
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub pause_after_type_ms: u32,
    /// Falls back to `pause_after_type_ms` when unset.
    pub pause_after_delete_ms: Option<u32>,
}

impl CyclerTiming {
    pub const fn new() -> Self {
        Self {
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            deleting_speed_ms: DEFAULT_DELETING_SPEED_MS,
            pause_after_type_ms: DEFAULT_PAUSE_AFTER_TYPE_MS,
            pause_after_delete_ms: None,
        }
    }

    pub const fn with_typing_speed_ms(mut self, ms: u32) -> Self {
        self.typing_speed_ms = ms;
        self
    }

    pub const fn with_deleting_speed_ms(mut self, ms: u32) -> Self {
        self.deleting_speed_ms = ms;
        self
    }

    pub const fn with_pause_after_type_ms(mut self, ms: u32) -> Self {
        self.pause_after_type_ms = ms;
        self
    }

    pub const fn with_pause_after_delete_ms(mut self, ms: Option<u32>) -> Self {
        self.pause_after_delete_ms = ms;
        self
    }

    pub const fn effective_pause_after_delete_ms(&self) -> u32 {
        match self.pause_after_delete_ms {
            Some(ms) => ms,
            None => self.pause_after_type_ms,
        }
    }
}

impl Default for CyclerTiming {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor glyph and blink behaviour.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CursorStyle {
    pub glyph: char,
    /// Blink half-period. `0` keeps the cursor steadily visible.
    pub blink_ms: u32,
    /// Opacity transition length reported to renderers after each toggle.
    pub fade_ms: u16,
}

impl CursorStyle {
    pub const fn new() -> Self {
        Self {
            glyph: DEFAULT_CURSOR_GLYPH,
            blink_ms: DEFAULT_CURSOR_BLINK_MS,
            fade_ms: DEFAULT_CURSOR_FADE_MS,
        }
    }

    pub const fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub const fn with_blink_ms(mut self, ms: u32) -> Self {
        self.blink_ms = ms;
        self
    }

    pub const fn with_fade_ms(mut self, ms: u16) -> Self {
        self.fade_ms = ms;
        self
    }
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable cycler configuration. Changing any field requires a new cycler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CyclerConfig<W> {
    pub words: W,
    pub timing: CyclerTiming,
    pub cursor: CursorStyle,
    /// Run one full pass, then freeze on the first word fully typed.
    pub stop_after_one_cycle: bool,
}

impl<W> CyclerConfig<W> {
    pub const fn new(words: W) -> Self {
        Self {
            words,
            timing: CyclerTiming::new(),
            cursor: CursorStyle::new(),
            stop_after_one_cycle: false,
        }
    }

    pub const fn with_timing(mut self, timing: CyclerTiming) -> Self {
        self.timing = timing;
        self
    }

    pub const fn with_cursor(mut self, cursor: CursorStyle) -> Self {
        self.cursor = cursor;
        self
    }

    pub const fn with_stop_after_one_cycle(mut self, stop_after_one_cycle: bool) -> Self {
        self.stop_after_one_cycle = stop_after_one_cycle;
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    EmptyWords,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWords => f.write_str("word list must contain at least one word"),
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_pause_falls_back_to_type_pause() {
        let timing = CyclerTiming::new().with_pause_after_type_ms(700);
        assert_eq!(timing.effective_pause_after_delete_ms(), 700);

        let timing = timing.with_pause_after_delete_ms(Some(120));
        assert_eq!(timing.effective_pause_after_delete_ms(), 120);
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = CyclerConfig::new(["a"]);
        assert_eq!(config.timing.typing_speed_ms, 100);
        assert_eq!(config.timing.deleting_speed_ms, 50);
        assert_eq!(config.timing.pause_after_type_ms, 1_500);
        assert_eq!(config.timing.effective_pause_after_delete_ms(), 1_500);
        assert_eq!(config.cursor.glyph, '|');
        assert_eq!(config.cursor.blink_ms, 500);
        assert!(!config.stop_after_one_cycle);
    }
}
