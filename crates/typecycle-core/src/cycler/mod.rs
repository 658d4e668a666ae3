//! Type/delete state machine cycling through a word list.
//!
//! A [`TextCycler`] never sleeps on its own. The owner calls
//! [`TextCycler::tick`] with a monotonic timestamp, and asks
//! [`TextCycler::next_deadline_ms`] when it should call again. Each scheduled
//! step re-arms the next one relative to its own deadline, so the sequence of
//! states is independent of how late the owner wakes up.

use log::{debug, info};

use crate::{
    config::{ConfigError, CursorStyle, CyclerConfig},
    content::WordSource,
    render::{AnimationFrame, AnimationKind, AnimationSpec, CyclerView},
    text_policy::{next_char_end, prev_char_start},
};

/// Lower bound applied to every phase delay so a step always moves time forward.
const MIN_STEP_MS: u32 = 1;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Typing,
    PausedAfterType,
    Deleting,
    PausedAfterDelete,
    /// One-shot mode finished; only the cursor keeps blinking.
    Frozen,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::PausedAfterType => "paused_after_type",
            Self::Deleting => "deleting",
            Self::PausedAfterDelete => "paused_after_delete",
            Self::Frozen => "frozen",
        }
    }
}

pub struct TextCycler<W: WordSource> {
    config: CyclerConfig<W>,
    word_count: usize,
    word_index: usize,
    /// Byte length of the displayed prefix of the current word.
    displayed: usize,
    phase: Phase,
    next_step_ms: u64,
    final_pass: bool,
    pass_completed: bool,
    cursor: CursorBlink,
    stopped: bool,
}

include!("runtime.rs");
include!("view.rs");
include!("cursor_blink.rs");
