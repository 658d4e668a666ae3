/// Cursor visibility toggled on its own schedule, independent of [`Phase`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CursorBlink {
    half_period_ms: u32,
    fade_ms: u16,
    visible: bool,
    next_toggle_ms: u64,
    fade: Option<AnimationSpec>,
}

impl CursorBlink {
    pub const fn new(style: CursorStyle, now_ms: u64) -> Self {
        Self {
            half_period_ms: style.blink_ms,
            fade_ms: style.fade_ms,
            visible: true,
            next_toggle_ms: now_ms + style.blink_ms as u64,
            fade: None,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// `None` when blinking is disabled.
    pub fn next_toggle_ms(&self) -> Option<u64> {
        if self.half_period_ms == 0 {
            None
        } else {
            Some(self.next_toggle_ms)
        }
    }

    /// Apply every toggle due at or before `now_ms`. Returns whether visibility flipped.
    pub fn advance_to(&mut self, now_ms: u64) -> bool {
        if self.half_period_ms == 0 || now_ms < self.next_toggle_ms {
            return false;
        }

        let half = self.half_period_ms as u64;
        let toggles = (now_ms - self.next_toggle_ms) / half + 1;
        let last_toggle_ms = self.next_toggle_ms + (toggles - 1) * half;
        self.next_toggle_ms = last_toggle_ms + half;

        let flipped = toggles % 2 == 1;
        if flipped {
            self.visible = !self.visible;
        }

        self.fade = (flipped && self.fade_ms > 0).then(|| {
            let kind = if self.visible {
                AnimationKind::FadeIn
            } else {
                AnimationKind::FadeOut
            };
            AnimationSpec::new(kind, last_toggle_ms, self.fade_ms)
        });

        flipped
    }

    pub fn fade_frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        self.fade.and_then(|fade| fade.frame(now_ms))
    }
}
