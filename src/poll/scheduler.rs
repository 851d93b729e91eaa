//! Fixed-cadence refresh timers.
//!
//! The scheduler holds no thread or task of its own. The UI loop asks it
//! which refreshes are due at the current instant, the same way it checks
//! for terminal events.

use std::time::{Duration, Instant};

use crate::data::Category;

/// One kind of periodic refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refresh {
    /// Single reading from `/api/current`.
    Current,
    /// Stats plus series for a category.
    Window(Category),
}

impl Refresh {
    /// Every refresh, in the order a full update dispatches them.
    pub const ALL: [Refresh; 4] = [
        Refresh::Current,
        Refresh::Window(Category::Raw),
        Refresh::Window(Category::Hourly),
        Refresh::Window(Category::Daily),
    ];

    /// How often this refresh fires.
    pub fn interval(self) -> Duration {
        match self {
            Refresh::Current => Duration::from_secs(2),
            Refresh::Window(Category::Raw) => Duration::from_secs(5),
            Refresh::Window(Category::Hourly) => Duration::from_secs(15),
            Refresh::Window(Category::Daily) => Duration::from_secs(30),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Refresh::Current => "current",
            Refresh::Window(c) => c.kind(),
        }
    }
}

#[derive(Debug, Clone)]
struct Timer {
    refresh: Refresh,
    interval: Duration,
    next_due: Instant,
}

/// Four independent timers, one per [`Refresh`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    timers: Vec<Timer>,
}

impl Scheduler {
    /// Start every timer at `start`; each first fires one interval later.
    pub fn new(start: Instant) -> Self {
        let timers = Refresh::ALL
            .into_iter()
            .map(|refresh| Timer {
                refresh,
                interval: refresh.interval(),
                next_due: start + refresh.interval(),
            })
            .collect();
        Self { timers }
    }

    /// Return the refreshes due at `now` and advance their timers.
    ///
    /// A timer that has fallen more than one interval behind fires once and
    /// is rescheduled from `now`.
    pub fn due(&mut self, now: Instant) -> Vec<Refresh> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            if now < timer.next_due {
                continue;
            }
            fired.push(timer.refresh);
            timer.next_due += timer.interval;
            if timer.next_due <= now {
                timer.next_due = now + timer.interval;
            }
        }
        fired
    }

    /// Time until the earliest timer fires (zero if one is already due).
    pub fn until_next(&self, now: Instant) -> Duration {
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::ZERO)
    }
}
