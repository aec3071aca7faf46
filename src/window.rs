use std::num::NonZeroUsize;

/// Counts start positions whose window sum is strictly greater than the sum of
/// the window one position earlier.
///
/// Keeps a running sum, adding the incoming element and dropping the outgoing
/// one, so each step is O(1). Sums are widened to `i128`.
pub fn count_increases(nrs: &[i64], window_size: NonZeroUsize) -> usize {
    let window_size = window_size.get();
    if nrs.len() < window_size {
        log::debug!(
            "No full window of size {} in {} integers.",
            window_size,
            nrs.len()
        );
        return 0;
    }

    let mut prev_sum = nrs[..window_size]
        .iter()
        .map(|&n| i128::from(n))
        .sum::<i128>();
    let mut increase_count = 0;
    for (outgoing, incoming) in nrs.iter().zip(&nrs[window_size..]) {
        let cur_sum = prev_sum - i128::from(*outgoing) + i128::from(*incoming);
        if cur_sum > prev_sum {
            increase_count += 1;
        }
        prev_sum = cur_sum;
    }
    log::debug!(
        "{} of {} windows(size {}) increased.",
        increase_count,
        nrs.len() - window_size + 1,
        window_size
    );

    increase_count
}

/// Same count as [`count_increases`], summing every window from scratch.
pub fn count_increases_naive(nrs: &[i64], window_size: NonZeroUsize) -> usize {
    let sums = nrs
        .windows(window_size.get())
        .map(|w| w.iter().map(|&n| i128::from(n)).sum::<i128>())
        .collect::<Vec<_>>();
    sums.windows(2).filter(|p| p[1] > p[0]).count()
}
