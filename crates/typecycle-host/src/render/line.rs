use typecycle_core::render::CyclerView;

use super::{FrameRenderer, LineFrame};

/// Renders `prefix + text + cursor` on a single line.
///
/// A hidden cursor is replaced with a space so the line width stays stable.
#[derive(Clone, Copy, Debug)]
pub struct LineRenderer<'a> {
    prefix: &'a str,
}

impl<'a> LineRenderer<'a> {
    pub const fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }
}

impl FrameRenderer for LineRenderer<'_> {
    fn render(&mut self, view: CyclerView<'_>, frame: &mut LineFrame) {
        frame.clear();
        if !(frame.push_str(self.prefix) && frame.push_str(view.text)) {
            return;
        }

        let mut glyph = [0u8; 4];
        if view.cursor_visible {
            frame.push_str(view.cursor_glyph.encode_utf8(&mut glyph));
        } else {
            frame.push_str(" ");
        }
    }
}

#[cfg(test)]
mod tests {
    use typecycle_core::{
        cycler::Phase,
        render::{AnimationFrame, AnimationKind},
    };

    use super::*;
    use crate::render::LINE_FRAME_BYTES;

    fn view(text: &str, visible: bool) -> CyclerView<'_> {
        CyclerView {
            text,
            cursor_glyph: '_',
            cursor_visible: visible,
            cursor_fade: None,
            phase: Phase::Typing,
        }
    }

    #[test]
    fn renders_prefix_text_and_cursor() {
        let mut renderer = LineRenderer::new("I am a ");
        let mut frame = LineFrame::new();

        renderer.render(view("Dev", true), &mut frame);
        assert_eq!(frame.as_str(), "I am a Dev_");

        renderer.render(view("De", false), &mut frame);
        assert_eq!(frame.as_str(), "I am a De ");
    }

    #[test]
    fn cursor_follows_visibility_even_mid_fade() {
        let mut fading_in = view("x", true);
        fading_in.cursor_fade = Some(AnimationFrame {
            kind: AnimationKind::FadeIn,
            progress_pct: 0,
        });
        let mut frame = LineFrame::new();

        LineRenderer::new("").render(fading_in, &mut frame);
        assert_eq!(frame.as_str(), "x_");
    }

    #[test]
    fn overlong_lines_are_truncated_on_char_boundaries() {
        let long = "é".repeat(LINE_FRAME_BYTES);
        let mut frame = LineFrame::new();

        LineRenderer::new("").render(view(&long, true), &mut frame);

        assert!(frame.as_str().len() <= LINE_FRAME_BYTES);
        assert!(frame.as_str().chars().all(|ch| ch == 'é'));
    }
}
