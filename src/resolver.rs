use hashbrown::HashMap;
use tracing::trace;

/// Breaks an integer target down into denominations, each usable any number of times.
pub trait Resolver {
    /// Returns how many of each denomination sum to `target`, or an empty map if none do.
    fn breakdown(&self, denominations: &[u32], target: u32) -> HashMap<u32, u32>;
}

/// Exact unbounded change-making that minimises the number of plates.
///
/// Runs in `O(target * denominations)` time and `O(target)` space. Among equally short
/// breakdowns, the denomination examined first (in slice order) wins at each step.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimumCount;

impl Resolver for MinimumCount {
    fn breakdown(&self, denominations: &[u32], target: u32) -> HashMap<u32, u32> {
        if target == 0 {
            return HashMap::new();
        }

        let target = target as usize;

        // min_count[w]: fewest plates summing to w, None while unreachable
        let mut min_count: Vec<Option<u32>> = vec![None; target + 1];
        let mut last_used: Vec<Option<u32>> = vec![None; target + 1];
        min_count[0] = Some(0);

        for w in 1..=target {
            for &d in denominations {
                let d_len = d as usize;
                if d_len == 0 || d_len > w {
                    continue;
                }

                let Some(prev) = min_count[w - d_len] else {
                    continue;
                };

                if min_count[w].is_none_or(|best| prev + 1 < best) {
                    min_count[w] = Some(prev + 1);
                    last_used[w] = Some(d);
                }
            }
        }

        if min_count[target].is_none() {
            trace!(scaled_target = target, "no exact breakdown");
            return HashMap::new();
        }

        let mut usage = HashMap::new();
        let mut w = target;
        while w > 0 {
            // every w on the path back from a reachable target is reachable, so last_used is set
            let Some(d) = last_used[w] else {
                break;
            };
            *usage.entry(d).or_insert(0) += 1;
            w -= d as usize;
        }

        usage
    }
}

/// Minimum-count breakdown of `target` over `denominations`, with no unit scaling.
#[must_use]
pub fn scaled_side_plates(denominations: &[u32], target: u32) -> HashMap<u32, u32> {
    MinimumCount.breakdown(denominations, target)
}
