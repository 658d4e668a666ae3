//! Shared, cancellable owner of a [`TextCycler`].
//!
//! The cycler lives behind a critical-section mutex. [`CyclerHandle::run`]
//! is the only place that ticks it, and [`CyclerHandle::stop`] flips it to
//! stopped under the same lock, so once `stop` returns no step scheduled
//! before it can still apply.

use core::{
    cell::RefCell,
    sync::atomic::{AtomicBool, AtomicU32, Ordering},
};

use embassy_futures::select::{Either, select};
use embassy_sync::{
    blocking_mutex::{Mutex, raw::CriticalSectionRawMutex},
    signal::Signal,
};
use embassy_time::Timer;
use heapless::String;
use log::{debug, info};
use typecycle_core::{
    config::{ConfigError, CyclerConfig},
    content::WordSource,
    cycler::{Phase, TextCycler, TickResult},
    render::CyclerView,
    text_policy::copy_bounded,
};

use crate::clock::MonotonicClock;

pub const SNAPSHOT_TEXT_BYTES: usize = 96;

/// Owned copy of the observable output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CyclerSnapshot {
    pub text: String<SNAPSHOT_TEXT_BYTES>,
    pub text_truncated: bool,
    pub cursor_visible: bool,
    pub phase: Phase,
    pub revision: u32,
}

pub struct CyclerHandle<W: WordSource> {
    cycler: Mutex<CriticalSectionRawMutex, RefCell<TextCycler<W>>>,
    clock: MonotonicClock,
    revision: AtomicU32,
    pass_reported: AtomicBool,
    stop_requested: Signal<CriticalSectionRawMutex, ()>,
    changed: Signal<CriticalSectionRawMutex, u32>,
    pass_completed: Signal<CriticalSectionRawMutex, ()>,
}

impl<W: WordSource> CyclerHandle<W> {
    pub fn start(config: CyclerConfig<W>, clock: MonotonicClock) -> Result<Self, ConfigError> {
        let cycler = TextCycler::start(config, clock.now_ms())?;
        info!(
            "cycler-handle: started words={} one_shot={}",
            cycler.word_count(),
            cycler.config().stop_after_one_cycle
        );

        Ok(Self {
            cycler: Mutex::new(RefCell::new(cycler)),
            clock,
            revision: AtomicU32::new(0),
            pass_reported: AtomicBool::new(false),
            stop_requested: Signal::new(),
            changed: Signal::new(),
            pass_completed: Signal::new(),
        })
    }

    /// Drive the cycler until [`Self::stop`] is called.
    ///
    /// Dropping this future before it completes stops the handle.
    pub async fn run(&self) {
        let _guard = self.stop_guard();
        debug!("cycler-handle: run loop entered");

        loop {
            if self.is_stopped() {
                break;
            }

            let next_deadline_ms = self
                .cycler
                .lock(|cycler| cycler.borrow().next_deadline_ms());
            let Some(deadline_ms) = next_deadline_ms else {
                // Frozen with blinking disabled: nothing left but waiting for stop.
                self.stop_requested.wait().await;
                break;
            };

            let timer = Timer::at(self.clock.instant_at(deadline_ms));
            match select(timer, self.stop_requested.wait()).await {
                Either::First(()) => self.tick_now(),
                Either::Second(()) => break,
            }
        }

        debug!("cycler-handle: run loop exited");
    }

    fn tick_now(&self) {
        let now_ms = self.clock.now_ms();
        let (result, pass_completed) = self.cycler.lock(|cycler| {
            let mut cycler = cycler.borrow_mut();
            (cycler.tick(now_ms), cycler.pass_completed())
        });

        if result == TickResult::RenderRequested {
            let revision = self.revision.fetch_add(1, Ordering::AcqRel).wrapping_add(1);
            self.changed.signal(revision);
        }

        if pass_completed && !self.pass_reported.swap(true, Ordering::AcqRel) {
            info!("cycler-handle: one-shot pass complete at {}ms", now_ms);
            self.pass_completed.signal(());
        }
    }

    /// Cancel all pending steps. Idempotent.
    pub fn stop(&self) {
        let newly_stopped = self.cycler.lock(|cycler| {
            let mut cycler = cycler.borrow_mut();
            let was_stopped = cycler.is_stopped();
            cycler.stop();
            !was_stopped
        });

        if newly_stopped {
            info!("cycler-handle: stopped");
            self.stop_requested.signal(());
            self.changed.signal(self.revision());
        }
    }

    pub fn stop_guard(&self) -> StopGuard<'_, W> {
        StopGuard { handle: self }
    }

    pub fn is_stopped(&self) -> bool {
        self.cycler.lock(|cycler| cycler.borrow().is_stopped())
    }

    pub fn is_frozen(&self) -> bool {
        self.cycler.lock(|cycler| cycler.borrow().is_frozen())
    }

    /// Bumped every time the observable output changes.
    pub fn revision(&self) -> u32 {
        self.revision.load(Ordering::Acquire)
    }

    /// Wait for the next output change (or stop); returns the revision seen.
    pub async fn wait_changed(&self) -> u32 {
        self.changed.wait().await
    }

    pub async fn wait_pass_completed(&self) {
        if self.pass_reported.load(Ordering::Acquire) {
            return;
        }
        self.pass_completed.wait().await;
    }

    /// Borrow the current view. `f` must not call back into this handle.
    pub fn with_view<F, R>(&self, f: F) -> R
    where
        F: FnOnce(CyclerView<'_>) -> R,
    {
        let now_ms = self.clock.now_ms();
        self.cycler
            .lock(|cycler| cycler.borrow().with_view(now_ms, f))
    }

    pub fn snapshot(&self) -> CyclerSnapshot {
        let revision = self.revision();
        self.with_view(|view| {
            let mut text = String::new();
            let text_truncated = copy_bounded(view.text, &mut text);
            CyclerSnapshot {
                text,
                text_truncated,
                cursor_visible: view.cursor_visible,
                phase: view.phase,
                revision,
            }
        })
    }
}

/// Stops the borrowed handle when dropped, on every exit path.
pub struct StopGuard<'a, W: WordSource> {
    handle: &'a CyclerHandle<W>,
}

impl<W: WordSource> Drop for StopGuard<'_, W> {
    fn drop(&mut self) {
        self.handle.stop();
    }
}

#[cfg(test)]
mod tests;
