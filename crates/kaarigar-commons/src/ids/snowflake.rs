// Snowflake ID generator
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Snowflake ID generator for time-ordered unique identifiers.
///
/// Job and bid listings are ordered by creation time with the id as the
/// tie-break, so identifiers must sort in generation order.
///
/// Format (64 bits):
/// - 41 bits: timestamp in milliseconds since custom epoch
/// - 10 bits: worker ID
/// - 12 bits: sequence number
pub struct SnowflakeGenerator {
    /// Worker ID (0-1023)
    worker_id: u16,

    /// Custom epoch (milliseconds since Unix epoch)
    epoch: u64,

    /// State protected by mutex
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    /// Last timestamp used
    last_timestamp: u64,

    /// Sequence number (0-4095)
    sequence: u16,
}

impl SnowflakeGenerator {
    /// Custom epoch: 2025-01-01 00:00:00 UTC
    pub const DEFAULT_EPOCH: u64 = 1735689600000;

    /// Maximum worker ID
    pub const MAX_WORKER_ID: u16 = 1023;

    /// Maximum sequence number
    const MAX_SEQUENCE: u16 = 4095;

    /// Create a new generator for the given worker.
    pub fn new(worker_id: u16) -> Self {
        assert!(
            worker_id <= Self::MAX_WORKER_ID,
            "worker_id must be <= {}",
            Self::MAX_WORKER_ID
        );

        Self {
            worker_id,
            epoch: Self::DEFAULT_EPOCH,
            state: Mutex::new(GeneratorState {
                last_timestamp: 0,
                sequence: 0,
            }),
        }
    }

    /// Generate the next ID.
    ///
    /// Monotonically increasing across calls on the same generator. If the
    /// wall clock moves backwards, generation stalls until it catches up
    /// with the last issued timestamp rather than handing out an ID that
    /// would sort before already-issued ones.
    pub fn next_id(&self) -> i64 {
        let mut state = self.state.lock().unwrap();

        let mut timestamp = Self::current_timestamp();

        if timestamp < state.last_timestamp {
            timestamp = Self::wait_until(state.last_timestamp);
        }

        if timestamp == state.last_timestamp {
            // Same millisecond - increment sequence
            state.sequence = (state.sequence + 1) & Self::MAX_SEQUENCE;

            if state.sequence == 0 {
                // Sequence overflow - wait for next millisecond
                timestamp = Self::wait_until(state.last_timestamp + 1);
            }
        } else {
            // New millisecond - reset sequence
            state.sequence = 0;
        }

        state.last_timestamp = timestamp;

        let id = ((timestamp - self.epoch) << 22)
            | ((self.worker_id as u64) << 12)
            | (state.sequence as u64);

        id as i64
    }

    /// Extract the Unix-millisecond timestamp from an ID.
    pub fn extract_timestamp(&self, id: i64) -> u64 {
        ((id as u64) >> 22) + self.epoch
    }

    fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    fn wait_until(target: u64) -> u64 {
        let mut timestamp = Self::current_timestamp();
        while timestamp < target {
            timestamp = Self::current_timestamp();
        }
        timestamp
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_snowflake_uniqueness() {
        let gen = SnowflakeGenerator::new(1);
        let mut ids = HashSet::new();

        for _ in 0..10000 {
            let id = gen.next_id();
            assert!(ids.insert(id), "Duplicate ID generated: {}", id);
        }
    }

    #[test]
    fn test_snowflake_ordering() {
        let gen = SnowflakeGenerator::new(1);
        let mut last_id = 0i64;

        for _ in 0..1000 {
            let id = gen.next_id();
            assert!(id > last_id, "IDs not in order: {} <= {}", id, last_id);
            last_id = id;
        }
    }

    #[test]
    fn test_timestamp_extraction() {
        let gen = SnowflakeGenerator::new(3);
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as u64;
        let id = gen.next_id();
        let ts = gen.extract_timestamp(id);
        assert!(ts >= before && ts <= before + 1000);
    }
}
