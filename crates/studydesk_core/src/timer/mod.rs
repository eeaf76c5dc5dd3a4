//! Persistent study timer.
//!
//! # Responsibility
//! - Track elapsed study time across process restarts.
//! - Keep the running/stopped distinction purely in durable storage.
//!
//! # Invariants
//! - `timer.started_at_ms` is present exactly while the timer runs; its
//!   absence means stopped.
//! - `timer.elapsed_ms` accumulates completed spans; restarting never loses
//!   previously accumulated time.
//! - Corrupt persisted values fail open to zero/stopped with a logged
//!   diagnostic.

use crate::clock::Clock;
use crate::store::KvStore;
use log::{debug, error, warn};

/// Storage key holding the epoch-ms start marker while running.
pub const STARTED_AT_KEY: &str = "timer.started_at_ms";
/// Storage key holding accumulated elapsed milliseconds.
pub const ELAPSED_KEY: &str = "timer.elapsed_ms";

/// Elapsed-time tracker persisted in key-value storage.
///
/// All state lives behind the two storage keys, so a process restart (or a
/// crash while running) resumes counting from durable state alone.
pub struct StudyTimer<K: KvStore, C: Clock> {
    kv: K,
    clock: C,
}

impl<K: KvStore, C: Clock> StudyTimer<K, C> {
    pub fn new(kv: K, clock: C) -> Self {
        Self { kv, clock }
    }

    /// Whether a start marker is currently persisted.
    pub fn is_running(&self) -> bool {
        self.read_ms(STARTED_AT_KEY).is_some()
    }

    /// Starts counting. No-op when already running; accumulated time from
    /// earlier spans is kept.
    pub fn start(&self) {
        if self.is_running() {
            debug!("event=timer_start module=timer status=noop reason=already_running");
            return;
        }

        let now = self.clock.now_ms();
        if let Err(err) = self.kv.put(STARTED_AT_KEY, &now.to_string()) {
            error!("event=timer_start module=timer status=error error={err}");
        }
    }

    /// Stops counting, folding the live span into the accumulated value.
    /// No-op when stopped.
    pub fn stop(&self) {
        let Some(started_at) = self.read_ms(STARTED_AT_KEY) else {
            debug!("event=timer_stop module=timer status=noop reason=not_running");
            return;
        };

        let span = (self.clock.now_ms() - started_at).max(0);
        let total = self.accumulated_ms() + span;
        if let Err(err) = self.kv.put(ELAPSED_KEY, &total.to_string()) {
            error!("event=timer_stop module=timer status=error error={err}");
            return;
        }
        if let Err(err) = self.kv.remove(STARTED_AT_KEY) {
            error!("event=timer_stop module=timer status=error error={err}");
        }
    }

    /// Clears both keys, returning the timer to a stopped zero state.
    pub fn reset(&self) {
        for key in [STARTED_AT_KEY, ELAPSED_KEY] {
            if let Err(err) = self.kv.remove(key) {
                error!("event=timer_reset module=timer status=error key={key} error={err}");
            }
        }
    }

    /// Total elapsed milliseconds: accumulated spans plus the live span when
    /// running.
    pub fn elapsed_ms(&self) -> i64 {
        let mut total = self.accumulated_ms();
        if let Some(started_at) = self.read_ms(STARTED_AT_KEY) {
            total += (self.clock.now_ms() - started_at).max(0);
        }
        total
    }

    /// Current elapsed time formatted `HH:MM:SS`.
    pub fn display(&self) -> String {
        format_clock(self.elapsed_ms())
    }

    fn accumulated_ms(&self) -> i64 {
        self.read_ms(ELAPSED_KEY).unwrap_or(0)
    }

    fn read_ms(&self, key: &str) -> Option<i64> {
        let raw = match self.kv.get(key) {
            Ok(value) => value?,
            Err(err) => {
                warn!("event=timer_read module=timer status=fallback key={key} error={err}");
                return None;
            }
        };

        match raw.parse::<i64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                warn!(
                    "event=timer_read module=timer status=fallback key={key} reason=corrupt_value value={raw}"
                );
                None
            }
        }
    }
}

/// Formats milliseconds as zero-padded `HH:MM:SS`.
pub fn format_clock(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
