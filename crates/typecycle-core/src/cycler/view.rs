impl<W: WordSource> TextCycler<W> {
    pub fn config(&self) -> &CyclerConfig<W> {
        &self.config
    }

    pub fn current_word(&self) -> &str {
        self.config.words.word_at(self.word_index).unwrap_or("")
    }

    /// Always a prefix of [`Self::current_word`].
    pub fn displayed_text(&self) -> &str {
        let word = self.current_word();
        word.get(..self.displayed).unwrap_or(word)
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_frozen(&self) -> bool {
        self.phase == Phase::Frozen
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Set once one-shot mode has deleted the last word and wrapped to the first.
    pub fn pass_completed(&self) -> bool {
        self.pass_completed
    }

    pub fn view(&self, now_ms: u64) -> CyclerView<'_> {
        CyclerView {
            text: self.displayed_text(),
            cursor_glyph: self.config.cursor.glyph,
            cursor_visible: self.cursor.visible(),
            cursor_fade: if self.stopped {
                None
            } else {
                self.cursor.fade_frame(now_ms)
            },
            phase: self.phase,
        }
    }

    pub fn with_view<F, R>(&self, now_ms: u64, f: F) -> R
    where
        F: FnOnce(CyclerView<'_>) -> R,
    {
        f(self.view(now_ms))
    }
}
