//! Process clock
//!
//! Wall-clock time that never goes backwards within the process.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_NANOS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Current UTC time, never earlier than a value previously returned
pub fn now() -> DateTime<Utc> {
    let wall = Utc::now();
    let Some(wall_nanos) = wall.timestamp_nanos_opt() else {
        // Outside the nanosecond range (year > 2262), no clamping possible
        return wall;
    };

    let previous = LAST_NANOS.fetch_max(wall_nanos, Ordering::AcqRel);
    if previous > wall_nanos {
        tracing::debug!("Wall clock stepped back by {}ns", previous - wall_nanos);
        return Utc.timestamp_nanos(previous);
    }
    wall
}
