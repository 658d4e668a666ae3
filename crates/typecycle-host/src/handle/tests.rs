use embassy_futures::{block_on, join::join, select::select};
use embassy_time::Timer;
use typecycle_core::config::{CursorStyle, CyclerTiming};

use super::*;

fn quick_config<'a>(words: &'a [&'a str], one_shot: bool) -> CyclerConfig<&'a [&'a str]> {
    CyclerConfig::new(words)
        .with_timing(
            CyclerTiming::new()
                .with_typing_speed_ms(2)
                .with_deleting_speed_ms(2)
                .with_pause_after_type_ms(5),
        )
        .with_cursor(CursorStyle::new().with_blink_ms(0))
        .with_stop_after_one_cycle(one_shot)
}

#[test]
fn empty_words_fail_at_start() {
    let words: &[&str] = &[];
    let result = CyclerHandle::start(CyclerConfig::new(words), MonotonicClock::start());
    assert_eq!(result.err(), Some(ConfigError::EmptyWords));
}

#[test]
fn one_shot_run_freezes_on_first_word() {
    let words = ["ab", "cd"];
    let handle = CyclerHandle::start(quick_config(&words, true), MonotonicClock::start())
        .expect("word list is non-empty");

    block_on(select(handle.run(), async {
        handle.wait_pass_completed().await;
        Timer::after_millis(200).await;
    }));

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.text.as_str(), "ab");
    assert!(!snapshot.text_truncated);
    assert_eq!(snapshot.phase, Phase::Frozen);
    assert!(handle.is_frozen());
    assert!(snapshot.revision > 0);
}

#[test]
fn dropping_the_run_future_stops_the_handle() {
    let words = ["ab"];
    let handle = CyclerHandle::start(quick_config(&words, false), MonotonicClock::start())
        .expect("word list is non-empty");

    block_on(select(handle.run(), Timer::after_millis(20)));

    assert!(handle.is_stopped());
}

#[test]
fn stop_guard_stops_on_scope_exit() {
    let words = ["ab"];
    let handle = CyclerHandle::start(quick_config(&words, false), MonotonicClock::start())
        .expect("word list is non-empty");

    {
        let _guard = handle.stop_guard();
        assert!(!handle.is_stopped());
    }

    assert!(handle.is_stopped());
}

#[test]
fn no_output_changes_after_stop() {
    let words = ["hello", "world"];
    let timing = CyclerTiming::new()
        .with_typing_speed_ms(3)
        .with_deleting_speed_ms(3)
        .with_pause_after_type_ms(3);
    let config = CyclerConfig::new(&words[..])
        .with_timing(timing)
        .with_cursor(CursorStyle::new().with_blink_ms(4));
    let handle = CyclerHandle::start(config, MonotonicClock::start())
        .expect("word list is non-empty");

    block_on(join(handle.run(), async {
        Timer::after_millis(25).await;
        handle.stop();
    }));

    let stopped = handle.snapshot();
    block_on(Timer::after_millis(60));
    assert_eq!(handle.snapshot(), stopped);
}

#[test]
fn run_returns_immediately_when_already_stopped() {
    let words = ["ab"];
    let handle = CyclerHandle::start(quick_config(&words, false), MonotonicClock::start())
        .expect("word list is non-empty");

    handle.stop();
    block_on(handle.run());

    assert_eq!(handle.revision(), 0);
    assert_eq!(handle.snapshot().text.as_str(), "");
}

#[test]
fn output_changes_bump_the_revision() {
    let words = ["abc"];
    let handle = CyclerHandle::start(quick_config(&words, false), MonotonicClock::start())
        .expect("word list is non-empty");

    let seen = block_on(async {
        match select(handle.run(), handle.wait_changed()).await {
            embassy_futures::select::Either::Second(revision) => revision,
            embassy_futures::select::Either::First(()) => 0,
        }
    });

    assert_eq!(seen, 1);
    assert!(handle.revision() >= 1);
    assert!(handle.with_view(|view| view.text.starts_with('a')));
}

#[test]
fn long_words_are_truncated_in_snapshots_only() {
    let long = "x".repeat(SNAPSHOT_TEXT_BYTES + 10);
    let words = [long.as_str()];
    let timing = CyclerTiming::new().with_typing_speed_ms(0);
    let config = CyclerConfig::new(&words[..])
        .with_timing(timing)
        .with_cursor(CursorStyle::new().with_blink_ms(0));
    let handle = CyclerHandle::start(config, MonotonicClock::start())
        .expect("word list is non-empty");

    block_on(select(handle.run(), async {
        while handle.with_view(|view| view.phase) == Phase::Typing {
            Timer::after_millis(5).await;
        }
    }));

    let snapshot = handle.snapshot();
    assert!(snapshot.text_truncated);
    assert_eq!(snapshot.text.len(), SNAPSHOT_TEXT_BYTES);
    assert_eq!(handle.with_view(|view| view.text.len()), long.len());
}
