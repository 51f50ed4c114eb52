use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;

/// Secret codes are decimal integers below this bound.
pub const SECRET_CODE_SPACE: u32 = 1_000_000;

/// Draws before registration gives up on finding a free secret code.
pub const SECRET_CODE_ATTEMPTS: usize = 64;

/// Issues nanosecond-timestamp ids that strictly increase across the process.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX - 1);
        self.next_after(now).to_string()
    }

    /// Returns `now`, or one past the last issued id if the clock has not moved.
    fn next_after(&self, now: i64) -> i64 {
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| {
                Some(now.max(prev.saturating_add(1)))
            })
            .unwrap_or_else(|prev| prev);
        now.max(prev.saturating_add(1))
    }
}

pub fn random_secret_code() -> String {
    rand::rng().random_range(0..SECRET_CODE_SPACE).to_string()
}

/// Draws codes until one is not taken, giving up after `SECRET_CODE_ATTEMPTS`.
pub fn pick_unused_code<T, D>(is_taken: T, mut draw: D) -> Option<String>
where
    T: Fn(&str) -> bool,
    D: FnMut() -> String,
{
    (0..SECRET_CODE_ATTEMPTS)
        .map(|_| draw())
        .find(|code| !is_taken(code))
}
