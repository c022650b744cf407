//! Countdown to the opening of the event.
//!
//! DESIGN
//! ======
//! [`Countdown`] is a small state machine fed one wall-clock sample per tick.
//! It yields [`Tick::Running`] until the target passes, then
//! [`Tick::Finished`] exactly once, then [`Tick::Stopped`] forever. The
//! owning view cancels its ticker on `Finished`.
//!
//! No monotonic-clock correction is applied: if the system clock jumps, the
//! next tick simply recomputes from the new sample.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use time::macros::datetime;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Opening time, in the visitor's local time zone.
pub const EVENT_START: PrimitiveDateTime = datetime!(2024-11-10 10:00:00);

/// Interval between countdown recomputations.
pub const TICK_PERIOD_MS: u64 = 1000;

/// Flip-card labels, in display order.
pub const UNIT_LABELS: [&str; 4] = ["DAYS", "HOURS", "MINUTES", "SECONDS"];

const MS_PER_SECOND: u64 = 1000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// [`EVENT_START`] pinned to a concrete UTC offset.
#[must_use]
pub fn target_in_offset(offset: UtcOffset) -> OffsetDateTime {
    EVENT_START.assume_offset(offset)
}

/// [`EVENT_START`] resolved with the offset the local zone has at that wall
/// time. `offset_at` maps a local wall time to its offset; the browser
/// passes `util::clock::offset_at_local`. The offset at page load
/// may differ when a daylight-saving change falls before the event.
#[must_use]
pub fn resolve_target(offset_at: impl FnOnce(PrimitiveDateTime) -> UtcOffset) -> OffsetDateTime {
    target_in_offset(offset_at(EVENT_START))
}

/// Remaining time split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownState {
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Split a remaining duration in milliseconds, truncating each unit.
    /// Zero or negative input yields [`CountdownState::ZERO`].
    #[must_use]
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::ZERO;
        }
        let ms = remaining_ms.unsigned_abs();
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms / MS_PER_HOUR) % 24,
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// `[days, hours, minutes, seconds]` zero-padded to two digits, paired
    /// with their flip-card labels.
    #[must_use]
    pub fn cards(&self) -> [(String, &'static str); 4] {
        let [days, hours, minutes, seconds] = UNIT_LABELS;
        [
            (pad2(self.days), days),
            (pad2(self.hours), hours),
            (pad2(self.minutes), minutes),
            (pad2(self.seconds), seconds),
        ]
    }
}

/// Zero-pad to at least two digits. Larger values are not truncated.
#[must_use]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Target not reached; display this state.
    Running(CountdownState),
    /// Target reached on this tick. Display zero and cancel the ticker.
    Finished,
    /// Already finished on an earlier tick; nothing changes.
    Stopped,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    target: OffsetDateTime,
    state: CountdownState,
    finished: bool,
}

impl Countdown {
    /// Start a countdown at [`CountdownState::ZERO`] until the first tick.
    #[must_use]
    pub fn new(target: OffsetDateTime) -> Self {
        Self { target, state: CountdownState::ZERO, finished: false }
    }

    #[must_use]
    pub fn target(&self) -> OffsetDateTime {
        self.target
    }

    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Recompute from the wall-clock sample `now`.
    pub fn tick(&mut self, now: OffsetDateTime) -> Tick {
        if self.finished {
            return Tick::Stopped;
        }
        let remaining = (self.target - now).whole_milliseconds();
        if remaining <= 0 {
            self.state = CountdownState::ZERO;
            self.finished = true;
            return Tick::Finished;
        }
        let remaining = i64::try_from(remaining).unwrap_or(i64::MAX);
        self.state = CountdownState::from_remaining_ms(remaining);
        Tick::Running(self.state)
    }
}
