use clap::Parser;
use typecycle_core::{
    config::{CursorStyle, CyclerConfig, CyclerTiming},
    content::default_headline_words,
};

/// Terminal typewriter that types, deletes and cycles through words
#[derive(Parser, Debug)]
#[command(name = "typecycle", version, long_about = None)]
pub(super) struct Args {
    /// Words to cycle through (defaults to a sample headline list)
    pub words: Vec<String>,

    /// Do not fall back to the sample words when none are given
    #[arg(long, default_value_t = false)]
    pub no_default_words: bool,

    /// Delay per typed character in milliseconds
    #[arg(long, default_value_t = 100)]
    pub typing_ms: u32,

    /// Delay per deleted character in milliseconds
    #[arg(long, default_value_t = 50)]
    pub deleting_ms: u32,

    /// Pause after a word is fully typed, in milliseconds
    #[arg(long, default_value_t = 1_500)]
    pub pause_ms: u32,

    /// Pause after a word is fully deleted (defaults to --pause-ms)
    #[arg(long)]
    pub delete_pause_ms: Option<u32>,

    /// Cursor glyph
    #[arg(long, default_value_t = '|')]
    pub cursor: char,

    /// Cursor blink half-period in milliseconds (0 = steady)
    #[arg(long, default_value_t = 500)]
    pub blink_ms: u32,

    /// Run one pass, then freeze on the first word
    #[arg(long, default_value_t = false)]
    pub once: bool,

    /// Text rendered before the animated word
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Stop after this many milliseconds (runs until interrupted otherwise)
    #[arg(long)]
    pub run_for_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Words from the command line, or the sample headline words unless disabled.
    pub(super) fn word_list(&self) -> Vec<String> {
        if self.words.is_empty() && !self.no_default_words {
            default_headline_words()
                .iter()
                .map(|word| word.to_string())
                .collect()
        } else {
            self.words.clone()
        }
    }

    pub(super) fn cycler_config<W>(&self, words: W) -> CyclerConfig<W> {
        let timing = CyclerTiming::new()
            .with_typing_speed_ms(self.typing_ms)
            .with_deleting_speed_ms(self.deleting_ms)
            .with_pause_after_type_ms(self.pause_ms)
            .with_pause_after_delete_ms(self.delete_pause_ms);
        let cursor = CursorStyle::new()
            .with_glyph(self.cursor)
            .with_blink_ms(self.blink_ms);

        CyclerConfig::new(words)
            .with_timing(timing)
            .with_cursor(cursor)
            .with_stop_after_one_cycle(self.once)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_cycler_config() {
        let args = Args::parse_from([
            "typecycle",
            "--typing-ms",
            "20",
            "--pause-ms",
            "300",
            "--cursor",
            "_",
            "--once",
            "Hi",
            "Yo",
        ]);
        let config = args.cycler_config(args.words.as_slice());

        assert_eq!(config.words, ["Hi", "Yo"]);
        assert_eq!(config.timing.typing_speed_ms, 20);
        assert_eq!(config.timing.deleting_speed_ms, 50);
        assert_eq!(config.timing.effective_pause_after_delete_ms(), 300);
        assert_eq!(config.cursor.glyph, '_');
        assert!(config.stop_after_one_cycle);
    }

    #[test]
    fn missing_words_fall_back_to_samples_unless_disabled() {
        let args = Args::parse_from(["typecycle"]);
        assert_eq!(args.word_list(), default_headline_words());

        let args = Args::parse_from(["typecycle", "--no-default-words"]);
        assert!(args.word_list().is_empty());

        let args = Args::parse_from(["typecycle", "--no-default-words", "Hi"]);
        assert_eq!(args.word_list(), ["Hi"]);
    }
}
