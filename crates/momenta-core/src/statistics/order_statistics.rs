//! # Order Statistics
//!
//! Selection-based statistics over mutable `f64` slices: order statistics,
//! empirical quantiles, quartiles, and rank assignment.
//!
//! The operations take `&mut self` because selection partially reorders the
//! slice in place; callers that need the original ordering should work on a
//! copy. Invalid requests (out-of-range order, tau outside `[0, 1]`, empty
//! data) yield `NAN` rather than an error, matching the evaluation
//! functions elsewhere in the crate.

use std::cmp::Ordering;

/// Tie-breaking strategies for [`OrderStatistics::ranks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankTieBreaker {
    /// Tied values all receive the lowest rank in the tied run.
    Min,
    /// Tied values all receive the highest rank in the tied run.
    Max,
    /// Tied values receive the average of the ranks in the tied run.
    Average,
    /// Tied values are ranked by order of appearance.
    First,
}

/// Selection-based statistics over a data container.
pub trait OrderStatistics {
    /// Returns the `order`-th smallest element (1-based).
    ///
    /// Returns `NAN` if `order` is zero or exceeds the container length.
    fn order_statistic(&mut self, order: usize) -> f64;

    /// Returns the empirical quantile at probability `tau` using the
    /// median-unbiased (R-8) definition.
    ///
    /// Returns `NAN` if `tau` is outside `[0, 1]` or the container is empty.
    fn quantile(&mut self, tau: f64) -> f64;

    /// Returns the `p`-th percentile, `p` in `0..=100`.
    ///
    /// Returns `NAN` for `p > 100` or empty data.
    fn percentile(&mut self, p: usize) -> f64;

    /// Returns the first quartile (`quantile(0.25)`).
    fn lower_quartile(&mut self) -> f64;

    /// Returns the third quartile (`quantile(0.75)`).
    fn upper_quartile(&mut self) -> f64;

    /// Returns the interquartile range.
    fn interquartile_range(&mut self) -> f64;

    /// Assigns a rank to each element, resolving ties with `tie_breaker`.
    ///
    /// The returned vector is parallel to the input: `ranks[i]` is the rank
    /// of `self[i]`.
    fn ranks(&mut self, tie_breaker: RankTieBreaker) -> Vec<f64>;
}

impl OrderStatistics for [f64] {
    fn order_statistic(&mut self, order: usize) -> f64 {
        if order < 1 || order > self.len() {
            return f64::NAN;
        }
        select_inplace(self, order - 1)
    }

    fn quantile(&mut self, tau: f64) -> f64 {
        quantile_inplace(self, tau)
    }

    fn percentile(&mut self, p: usize) -> f64 {
        if p > 100 {
            return f64::NAN;
        }
        quantile_inplace(self, p as f64 / 100.0)
    }

    fn lower_quartile(&mut self) -> f64 {
        quantile_inplace(self, 0.25)
    }

    fn upper_quartile(&mut self) -> f64 {
        quantile_inplace(self, 0.75)
    }

    fn interquartile_range(&mut self) -> f64 {
        self.upper_quartile() - self.lower_quartile()
    }

    fn ranks(&mut self, tie_breaker: RankTieBreaker) -> Vec<f64> {
        let n = self.len();
        let mut ranks = vec![0.0; n];
        let mut index: Vec<usize> = (0..n).collect();
        // Stable sort keeps appearance order inside tied runs
        index.sort_by(|&a, &b| self[a].partial_cmp(&self[b]).unwrap_or(Ordering::Equal));

        if tie_breaker == RankTieBreaker::First {
            for (pos, &idx) in index.iter().enumerate() {
                ranks[idx] = (pos + 1) as f64;
            }
            return ranks;
        }

        let mut run_start = 0;
        for pos in 1..=n {
            if pos == n || self[index[pos]] != self[index[run_start]] {
                let rank = match tie_breaker {
                    RankTieBreaker::Min => (run_start + 1) as f64,
                    RankTieBreaker::Max => pos as f64,
                    // Average of run_start+1 ..= pos
                    RankTieBreaker::Average => (run_start + pos) as f64 / 2.0 + 0.5,
                    RankTieBreaker::First => unreachable!("assigned by the early return"),
                };
                for &idx in &index[run_start..pos] {
                    ranks[idx] = rank;
                }
                run_start = pos;
            }
        }
        ranks
    }
}

/// R-8 empirical quantile with in-place selection.
fn quantile_inplace(data: &mut [f64], tau: f64) -> f64 {
    if !(0.0..=1.0).contains(&tau) || data.is_empty() {
        return f64::NAN;
    }

    let n = data.len();
    let h = (n as f64 + 1.0 / 3.0) * tau + 1.0 / 3.0;
    let hf = h.floor() as i64;

    if hf <= 0 || tau == 0.0 {
        return slice_min(data);
    }
    if hf >= n as i64 || (tau - 1.0).abs() < f64::EPSILON {
        return slice_max(data);
    }

    let a = select_inplace(data, (hf - 1) as usize);
    let b = select_inplace(data, hf as usize);
    a + (h - hf as f64) * (b - a)
}

/// Quickselect with median-of-three pivoting.
///
/// Returns the element of rank `rank` (0-based) and leaves the slice
/// partially ordered around it. Expected O(n).
fn select_inplace(data: &mut [f64], rank: usize) -> f64 {
    if rank == 0 {
        return slice_min(data);
    }
    if rank == data.len() - 1 {
        return slice_max(data);
    }

    let mut low = 0;
    let mut high = data.len() - 1;
    loop {
        if high <= low + 1 {
            if high == low + 1 && data[high] < data[low] {
                data.swap(low, high);
            }
            return data[rank];
        }

        // Median-of-three: order low, low+1, high so the ends act as
        // sentinels for the partition scan.
        let middle = (low + high) / 2;
        data.swap(middle, low + 1);
        if data[low] > data[high] {
            data.swap(low, high);
        }
        if data[low + 1] > data[high] {
            data.swap(low + 1, high);
        }
        if data[low] > data[low + 1] {
            data.swap(low, low + 1);
        }

        let pivot = data[low + 1];
        let mut i = low + 1;
        let mut j = high;
        loop {
            loop {
                i += 1;
                if data[i] >= pivot {
                    break;
                }
            }
            loop {
                j -= 1;
                if data[j] <= pivot {
                    break;
                }
            }
            if j < i {
                break;
            }
            data.swap(i, j);
        }
        data[low + 1] = data[j];
        data[j] = pivot;

        if j >= rank {
            high = j - 1;
        }
        if j <= rank {
            low = i;
        }
    }
}

fn slice_min(data: &[f64]) -> f64 {
    data.iter().fold(f64::INFINITY, |acc, &x| acc.min(x))
}

fn slice_max(data: &[f64]) -> f64 {
    data.iter().fold(f64::NEG_INFINITY, |acc, &x| acc.max(x))
}

// =============================================================================
// TESTS
// =============================================================================
