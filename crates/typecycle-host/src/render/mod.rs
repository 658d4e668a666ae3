pub mod line;
pub mod terminal;

use heapless::String;
use typecycle_core::render::CyclerView;

pub const LINE_FRAME_BYTES: usize = 192;

/// One rendered line, bounded so rendering never allocates.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LineFrame {
    text: String<LINE_FRAME_BYTES>,
}

impl LineFrame {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append whole characters while they fit; returns `false` once truncated.
    pub fn push_str(&mut self, text: &str) -> bool {
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                return false;
            }
        }
        true
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }
}

pub trait FrameRenderer {
    fn render(&mut self, view: CyclerView<'_>, frame: &mut LineFrame);
}
