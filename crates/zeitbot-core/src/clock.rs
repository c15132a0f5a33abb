//! Injectable time source.
//!
//! Message timestamps come from a `ClockFn` handed to the session layer at
//! construction, so tests can pin time instead of sleeping around `Utc::now`.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of "now" for message timestamps.
pub type ClockFn = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The real wall clock.
pub fn system_clock() -> ClockFn {
    Arc::new(Utc::now)
}

/// A clock frozen at `at`. For tests.
pub fn fixed_clock(at: DateTime<Utc>) -> ClockFn {
    Arc::new(move || at)
}
