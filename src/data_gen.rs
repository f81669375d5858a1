use rand::seq::SliceRandom;
use rand::seq::index;
use rand::thread_rng;
use rand_distr::{Distribution, Normal, NormalError};

// default = 4k values
pub const DEFAULT_COUNT: usize = 1 << 12;

/// `count` distinct values drawn uniformly from `min..=max`, in random order.
/// Yields fewer values when the range is smaller than `count`.
pub fn generate_distinct_i32(count: usize, min: i32, max: i32) -> Vec<i32> {
    if min > max {
        return Vec::new();
    }
    let span = (max as i64 - min as i64 + 1) as usize;
    let mut rng = thread_rng();

    index::sample(&mut rng, span, count.min(span))
        .into_iter()
        .map(|offset| (min as i64 + offset as i64) as i32)
        .collect()
}

/// `0..count` in random order.
pub fn generate_shuffled_i32(count: usize) -> Vec<i32> {
    let mut values = generate_sorted_i32(count);
    values.shuffle(&mut thread_rng());
    values
}

/// `0..count` ascending: the worst insertion order for an unbalanced tree.
pub fn generate_sorted_i32(count: usize) -> Vec<i32> {
    (0..count as i32).collect()
}

/// Normally distributed values; repeats are likely, which makes this useful
/// for exercising duplicate rejection.
pub fn generate_normal_i32(count: usize, mean: f64, std_dev: f64) -> Result<Vec<i32>, NormalError> {
    // Normal::new accepts a negative std dev and mirrors the samples
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(NormalError::BadVariance);
    }
    let normal = Normal::new(mean, std_dev)?;
    let mut rng = thread_rng();

    Ok((0..count)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            sample.max(i32::MIN as f64).min(i32::MAX as f64) as i32
        })
        .collect())
}

pub fn generate_smooth_i32(count: Option<usize>) -> Result<Vec<i32>, NormalError> {
    let count = count.unwrap_or(DEFAULT_COUNT);
    let std_dev = (count as f64 / 4.0).max(1.0);
    generate_normal_i32(count, 0.0, std_dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distinct_values_in_range() {
        let data = generate_distinct_i32(1000, -500, 2000);
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| (-500..=2000).contains(&x)));
        assert_eq!(data.iter().collect::<HashSet<_>>().len(), 1000);
    }

    #[test]
    fn test_distinct_small_range() {
        let mut data = generate_distinct_i32(10, 3, 5);
        data.sort();
        assert_eq!(data, vec![3, 4, 5]);
        assert!(generate_distinct_i32(10, 5, 3).is_empty());
    }

    #[test]
    fn test_distinct_full_i32_range() {
        let data = generate_distinct_i32(100, i32::MIN, i32::MAX);
        assert_eq!(data.len(), 100);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut data = generate_shuffled_i32(256);
        data.sort();
        assert_eq!(data, generate_sorted_i32(256));
    }

    #[test]
    fn test_smooth_default() {
        let data = generate_smooth_i32(None).unwrap();
        assert_eq!(data.len(), DEFAULT_COUNT);
    }

    #[test]
    fn test_normal_rejects_bad_std_dev() {
        assert_eq!(generate_normal_i32(3, 0.0, -1.0), Err(NormalError::BadVariance));
        assert!(generate_normal_i32(3, 0.0, f64::NAN).is_err());
        assert!(generate_normal_i32(3, 0.0, f64::INFINITY).is_err());
        assert_eq!(generate_normal_i32(3, 7.0, 0.0), Ok(vec![7, 7, 7]));
    }
}
