use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::{history::ResultHistory, timer::SessionTimer};

pub const DEFAULT_MAX_SECONDS: u32 = 60;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub max_seconds: u32,
    pub tick_interval: Duration,
    pub auto_stop_at_cap: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_seconds: DEFAULT_MAX_SECONDS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            auto_stop_at_cap: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionPhase {
    Idle,
    Active,
}

/// Outcome of a single toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Stopped { committed: Option<u32> },
}

/// Read-only snapshot handed to the renderer after every state change
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub active: bool,
    pub elapsed_seconds: u32,
    pub capped: bool,
    pub started_at: Option<DateTime<Local>>,
    pub history: &'a ResultHistory,
}

/// Breath-hold timing state machine.
///
/// Two phases: `Idle` and `Active`. Starting resets the count and arms the
/// timer, every timer period adds one second up to the cap, and stopping
/// disarms the timer and commits any non-zero count to the history.
#[derive(Debug)]
pub struct SessionController {
    config: SessionConfig,
    elapsed_seconds: u32,
    started_at: Option<DateTime<Local>>,
    // Some(_) exactly while a session is active
    timer: Option<SessionTimer>,
    history: ResultHistory,
}

impl SessionController {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            elapsed_seconds: 0,
            started_at: None,
            timer: None,
            history: ResultHistory::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        if self.timer.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn is_capped(&self) -> bool {
        self.is_active() && self.elapsed_seconds >= self.config.max_seconds
    }

    pub fn history(&self) -> &ResultHistory {
        &self.history
    }

    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    /// Begin a session anchored at `now`. Returns false if one is already running.
    pub fn start_at(&mut self, now: Instant) -> bool {
        if self.is_active() {
            tracing::debug!("start ignored, session already active");
            return false;
        }

        self.elapsed_seconds = 0;
        self.started_at = Some(Local::now());
        self.timer = Some(SessionTimer::arm(now, self.config.tick_interval));
        tracing::info!("bolt test started");
        true
    }

    /// Advance the count by one second, saturating at the cap
    pub fn tick(&mut self) {
        if !self.is_active() {
            return;
        }
        self.elapsed_seconds = (self.elapsed_seconds + 1).min(self.config.max_seconds);
    }

    pub fn poll(&mut self) -> u32 {
        self.poll_at(Instant::now())
    }

    /// Deliver the timer periods that have passed by `now`. Returns the
    /// number of ticks applied, which never takes the count past the cap.
    pub fn poll_at(&mut self, now: Instant) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.due(now),
            None => return 0,
        };

        let applied = due.min(self.config.max_seconds.saturating_sub(self.elapsed_seconds));
        for _ in 0..applied {
            self.tick();
        }

        // applied > 0 means the count was below the cap before this poll
        if applied > 0 && self.is_capped() {
            if self.config.auto_stop_at_cap {
                tracing::info!(cap = self.config.max_seconds, "cap reached, stopping");
                self.stop();
            } else {
                tracing::debug!(cap = self.config.max_seconds, "cap reached");
            }
        }

        applied
    }

    /// End the session. Safe to call while idle. Returns the committed result.
    pub fn stop(&mut self) -> Option<u32> {
        let was_active = self.timer.take().is_some();

        let committed = match self.elapsed_seconds {
            0 => None,
            secs => {
                self.history.push(secs);
                Some(secs)
            }
        };

        if was_active {
            match committed {
                Some(secs) => tracing::info!(seconds = secs, "bolt result recorded"),
                None => tracing::info!("bolt test stopped without a result"),
            }
        }

        self.elapsed_seconds = 0;
        self.started_at = None;
        committed
    }

    pub fn toggle(&mut self) -> Transition {
        self.toggle_at(Instant::now())
    }

    pub fn toggle_at(&mut self, now: Instant) -> Transition {
        match self.phase() {
            SessionPhase::Idle => {
                self.start_at(now);
                Transition::Started
            }
            SessionPhase::Active => Transition::Stopped {
                committed: self.stop(),
            },
        }
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            active: self.is_active(),
            elapsed_seconds: self.elapsed_seconds,
            capped: self.is_capped(),
            started_at: self.started_at,
            history: &self.history,
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
