//! Fixed-period driver for [`PollCycle`].
//!
//! The scheduler alternates between two phases:
//!
//! ```text
//!   Running ──cycle complete──▶ Idle ──sleep(period)──▶ Running ─ ...
//! ```
//!
//! The sleep always follows the cycle, whatever its outcome, so a slow cycle
//! pushes the next one back by its own duration. Cycles never overlap.

use std::convert::Infallible;
use std::time::Duration;

use statusbot_core::{Cursor, NotificationState, Notifier, StatusSource};
use tracing::debug;

use crate::PollCycle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
}

/// Owns the cursor and notification state for the lifetime of the process.
pub struct Scheduler<S, N> {
    cycle: PollCycle<S, N>,
    period: Duration,
    cursor: Cursor,
    state: NotificationState,
    phase: Phase,
    completed: u64,
}

impl<S: StatusSource, N: Notifier> Scheduler<S, N> {
    pub fn new(cycle: PollCycle<S, N>, period: Duration, cursor: Cursor) -> Self {
        Self {
            cycle,
            period,
            cursor,
            state: NotificationState::new(),
            phase: Phase::Idle,
            completed: 0,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of cycles run so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn cycle(&self) -> &PollCycle<S, N> {
        &self.cycle
    }

    /// One full transition: run a cycle, then sleep for the period.
    pub async fn tick(&mut self) {
        self.phase = Phase::Running;
        debug!(cycle = self.completed + 1, from_date = %self.cursor, "starting poll cycle");
        let state = std::mem::take(&mut self.state);
        let (cursor, state) = self.cycle.run(self.cursor.clone(), state).await;
        self.cursor = cursor;
        self.state = state;
        self.completed += 1;
        self.phase = Phase::Idle;

        debug!(period_secs = self.period.as_secs(), "sleeping until next cycle");
        tokio::time::sleep(self.period).await;
    }

    /// Poll forever. Returns only if the surrounding task is dropped.
    pub async fn start(mut self) -> Infallible {
        loop {
            self.tick().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingNotifier, ScriptedSource};
    use serde_json::json;
    use statusbot_core::FetchError;
    use tokio::time::Instant;

    const PERIOD: Duration = Duration::from_secs(600);

    fn scheduler(source: ScriptedSource) -> Scheduler<ScriptedSource, RecordingNotifier> {
        Scheduler::new(
            PollCycle::new(source, RecordingNotifier::new()),
            PERIOD,
            Cursor::from_unix(500),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn tick_runs_cycle_then_sleeps_period() {
        let mut scheduler = scheduler(ScriptedSource::new([Ok(json!({
            "homeworks": [],
            "current_date": 1000
        }))]));
        assert_eq!(scheduler.phase(), Phase::Idle);

        let started = Instant::now();
        scheduler.tick().await;

        assert_eq!(started.elapsed(), PERIOD);
        assert_eq!(scheduler.phase(), Phase::Idle);
        assert_eq!(scheduler.completed(), 1);
        assert_eq!(scheduler.cursor(), &Cursor::from_unix(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_cycle_still_sleeps() {
        let mut scheduler = scheduler(ScriptedSource::new([Err(FetchError::Transport(
            "dns error".into(),
        ))]));

        let started = Instant::now();
        scheduler.tick().await;

        assert_eq!(started.elapsed(), PERIOD);
        assert_eq!(scheduler.cursor(), &Cursor::from_unix(500));
        assert_eq!(
            scheduler.state().last_message(),
            Some("Connection error: request to the API failed: dns error")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_cycle_delays_next_poll() {
        let latency = Duration::from_secs(30);
        let mut scheduler = scheduler(
            ScriptedSource::new([Ok(json!({"homeworks": [], "current_date": 1000}))])
                .with_latency(latency),
        );

        let started = Instant::now();
        scheduler.tick().await;

        assert_eq!(started.elapsed(), latency + PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn start_polls_once_per_period() {
        let source = ScriptedSource::new([
            Ok(json!({"homeworks": [], "current_date": 1000})),
            Ok(json!({"homeworks": [], "current_date": 1600})),
            Err(FetchError::Transport("connection reset".into())),
            Ok(json!({"homeworks": [], "current_date": 2800})),
        ]);
        let scheduler = scheduler(source.clone());

        // Cycles at t = 0, 600, 1200, 1800; the next would be at 2400.
        let outcome =
            tokio::time::timeout(PERIOD * 3 + Duration::from_secs(1), scheduler.start()).await;
        assert!(outcome.is_err(), "scheduler has no stop condition");

        assert_eq!(
            source.requests(),
            vec![
                Cursor::from_unix(500),
                Cursor::from_unix(1000),
                Cursor::from_unix(1600),
                Cursor::from_unix(1600),
            ]
        );
    }
}
