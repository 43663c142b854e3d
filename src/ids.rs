//! Unique identifier allocation.
//!
//! Identifiers are drawn uniformly from `100000..=999999`, so they never
//! carry a leading zero. The caller owns the used-set; allocation reserves
//! the returned id in it before returning.

use rand::Rng;
use std::collections::HashSet;

/// Smallest identifier the allocator hands out.
pub const MIN_ID: u32 = 100_000;
/// Largest identifier the allocator hands out.
pub const MAX_ID: u32 = 999_999;

/// Draw ids until one is not in `used`, reserve it, and return it.
///
/// Retries are unbounded. With 900,000 possible values this only degrades
/// when the space is close to exhausted.
pub fn generate_unique_id<R: Rng>(used: &mut HashSet<String>, rng: &mut R) -> String {
    loop {
        let candidate = rng.random_range(MIN_ID..=MAX_ID).to_string();
        if !used.contains(&candidate) {
            used.insert(candidate.clone());
            return candidate;
        }
    }
}
