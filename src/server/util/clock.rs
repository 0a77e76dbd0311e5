//! Clock and random sources for the event engine.
//!
//! Services read time and roll dice through these ports so tests can pin both.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform roll in `[0, 100)`.
    fn roll_percent(&self) -> f64;

    /// Random suffix used to make public event identifiers unique.
    fn id_suffix(&self) -> u32;
}

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses the thread-local generator.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn roll_percent(&self) -> f64 {
        rand::rng().random_range(0.0..100.0)
    }

    fn id_suffix(&self) -> u32 {
        rand::rng().random()
    }
}

/// Clock frozen at a point in time that tests advance by hand.
#[cfg(test)]
pub struct FixedClock(std::sync::Mutex<DateTime<Utc>>);

#[cfg(test)]
impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(std::sync::Mutex::new(now))
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.0.lock().unwrap();
        *now += by;
    }
}

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

/// Random source that always rolls the same value.
///
/// Id suffixes still count upwards so events created in the same second stay unique.
#[cfg(test)]
pub struct FixedRandom {
    roll: std::sync::Mutex<f64>,
    suffix: std::sync::atomic::AtomicU32,
}

#[cfg(test)]
impl FixedRandom {
    pub fn new(roll: f64) -> Self {
        Self {
            roll: std::sync::Mutex::new(roll),
            suffix: std::sync::atomic::AtomicU32::new(1),
        }
    }

    /// Always succeeds any chance above zero.
    pub fn lucky() -> Self {
        Self::new(0.0)
    }

    /// Always fails any chance below one hundred.
    pub fn unlucky() -> Self {
        Self::new(99.9)
    }

    pub fn set_roll(&self, roll: f64) {
        *self.roll.lock().unwrap() = roll;
    }
}

#[cfg(test)]
impl RandomPort for FixedRandom {
    fn roll_percent(&self) -> f64 {
        *self.roll.lock().unwrap()
    }

    fn id_suffix(&self) -> u32 {
        self.suffix
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
    }
}
