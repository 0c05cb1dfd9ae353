use crate::application::ports::time::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock [`Clock`] for production wiring; tests substitute a fixed one.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
