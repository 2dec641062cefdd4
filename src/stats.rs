//! Run statistics.

use std::time::Duration;

use serde::Serialize;

/// Counters accumulated over one run.
///
/// `comparisons` and `swaps` both count emitted steps, not real comparisons
/// or swaps. The displayed numbers have always meant "steps so far" and are
/// kept that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl RunStats {
    pub fn record_step(&mut self, elapsed: Duration) {
        self.comparisons += 1;
        self.swaps += 1;
        self.elapsed = elapsed;
    }

    pub fn steps(&self) -> u64 {
        self.comparisons
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}
