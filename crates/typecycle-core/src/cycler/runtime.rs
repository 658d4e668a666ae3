impl<W: WordSource> TextCycler<W> {
    /// Validate `config` and arm the first typing step and the cursor blink.
    pub fn start(config: CyclerConfig<W>, now_ms: u64) -> Result<Self, ConfigError> {
        let word_count = config.words.word_count();
        if word_count == 0 {
            return Err(ConfigError::EmptyWords);
        }

        let cursor = CursorBlink::new(config.cursor, now_ms);
        let mut cycler = Self {
            config,
            word_count,
            word_index: 0,
            displayed: 0,
            phase: Phase::Typing,
            next_step_ms: now_ms,
            final_pass: false,
            pass_completed: false,
            cursor,
            stopped: false,
        };
        cycler.begin_typing();
        debug!(
            "cycler: start words={} one_shot={} first_step_ms={}",
            word_count, cycler.config.stop_after_one_cycle, cycler.next_step_ms
        );

        Ok(cycler)
    }

    /// Apply every step and cursor toggle due at or before `now_ms`.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        if self.stopped {
            return TickResult::NoRender;
        }

        let mut changed = false;
        while let Some(due) = self.phase_deadline_ms() {
            if due > now_ms {
                break;
            }
            changed |= self.step();
        }
        changed |= self.cursor.advance_to(now_ms);

        if changed || self.cursor.fade_frame(now_ms).is_some() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Earliest pending deadline, or `None` once stopped.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        if self.stopped {
            return None;
        }

        match (self.phase_deadline_ms(), self.cursor.next_toggle_ms()) {
            (Some(step), Some(blink)) => Some(step.min(blink)),
            (step, blink) => step.or(blink),
        }
    }

    /// Cancel every pending step. Nothing observable changes afterwards.
    pub fn stop(&mut self) {
        if !self.stopped {
            debug!(
                "cycler: stop phase={} word_index={}",
                self.phase.as_str(),
                self.word_index
            );
        }
        self.stopped = true;
    }

    fn phase_deadline_ms(&self) -> Option<u64> {
        match self.phase {
            Phase::Frozen => None,
            _ => Some(self.next_step_ms),
        }
    }

    fn schedule(&mut self, after_ms: u32) {
        self.next_step_ms += step_delay(after_ms);
    }

    /// Run the step scheduled at `next_step_ms`. Returns whether the text changed.
    fn step(&mut self) -> bool {
        let timing = self.config.timing;
        let before = self.displayed;
        let word_len = self.current_word().len();

        match self.phase {
            Phase::Typing => {
                self.displayed = next_char_end(self.current_word(), self.displayed);
                if self.displayed < word_len {
                    self.schedule(timing.typing_speed_ms);
                } else {
                    self.finish_typing();
                }
            }
            Phase::PausedAfterType => self.begin_deleting(),
            Phase::Deleting => {
                self.displayed = prev_char_start(self.current_word(), self.displayed);
                if self.displayed > 0 {
                    self.schedule(timing.deleting_speed_ms);
                } else {
                    self.finish_deleting();
                }
            }
            Phase::PausedAfterDelete => {
                let next_index = (self.word_index + 1) % self.word_count;
                if self.config.stop_after_one_cycle && next_index == 0 {
                    self.final_pass = true;
                    self.pass_completed = true;
                    info!("cycler: one-shot pass complete, retyping first word");
                }
                self.word_index = next_index;
                self.displayed = 0;
                self.begin_typing();
            }
            Phase::Frozen => {}
        }

        self.displayed != before
    }

    /// An empty word has nothing to type and goes straight to its pause (or freezes).
    fn begin_typing(&mut self) {
        if self.current_word().is_empty() {
            self.finish_typing();
        } else {
            self.enter_phase(Phase::Typing);
            self.schedule(self.config.timing.typing_speed_ms);
        }
    }

    fn finish_typing(&mut self) {
        if self.final_pass {
            self.enter_phase(Phase::Frozen);
        } else {
            self.enter_phase(Phase::PausedAfterType);
            self.schedule(self.config.timing.pause_after_type_ms);
        }
    }

    fn begin_deleting(&mut self) {
        if self.displayed == 0 {
            self.finish_deleting();
        } else {
            self.enter_phase(Phase::Deleting);
            self.schedule(self.config.timing.deleting_speed_ms);
        }
    }

    fn finish_deleting(&mut self) {
        self.enter_phase(Phase::PausedAfterDelete);
        self.schedule(self.config.timing.effective_pause_after_delete_ms());
    }

    fn enter_phase(&mut self, phase: Phase) {
        debug!(
            "cycler: {} -> {} word_index={} at_ms={}",
            self.phase.as_str(),
            phase.as_str(),
            self.word_index,
            self.next_step_ms
        );
        self.phase = phase;
    }
}

fn step_delay(ms: u32) -> u64 {
    ms.max(MIN_STEP_MS) as u64
}
