//! Intermittent-demand decomposition and temporal aggregation helpers
//!
//! An intermittent series is split into the sizes of its demand events
//! ([`demand`]), the spacing between them ([`intervals`]) and an occurrence
//! indicator ([`probability`]). [`chunk_sums`] aggregates a series into
//! non-overlapping buckets, dropping the oldest observations that do not
//! fill a whole bucket.

use forecast_spi::{ForecastError, Result};

/// Strictly positive observations, in order
pub fn demand(series: &[f64]) -> Vec<f64> {
    series.iter().copied().filter(|&v| v > 0.0).collect()
}

/// Number of steps between successive nonzero observations
///
/// For each nonzero element, the count of steps since the previous nonzero
/// element, including itself. The count for the first nonzero element
/// starts at the beginning of the series, so a leading nonzero value has an
/// interval of 1.
pub fn intervals(series: &[f64]) -> Vec<f64> {
    let mut out = Vec::new();
    let mut counter = 1.0;
    for &value in series {
        if value == 0.0 {
            counter += 1.0;
        } else {
            out.push(counter);
            counter = 1.0;
        }
    }
    out
}

/// Demand occurrence indicator: 1.0 where nonzero, 0.0 elsewhere
pub fn probability(series: &[f64]) -> Vec<f64> {
    series
        .iter()
        .map(|&v| if v != 0.0 { 1.0 } else { 0.0 })
        .collect()
}

/// Sum of each contiguous `chunk_size` block
///
/// The first `len % chunk_size` observations are dropped so that the most
/// recent observation always closes the last chunk.
///
/// # Errors
///
/// `InvalidParameter` if `chunk_size` is zero.
pub fn chunk_sums(series: &[f64], chunk_size: usize) -> Result<Vec<f64>> {
    if chunk_size == 0 {
        return Err(ForecastError::invalid_parameter(
            "chunk_size",
            "must be at least 1",
        ));
    }
    let remainder = series.len() % chunk_size;
    Ok(series[remainder..]
        .chunks_exact(chunk_size)
        .map(|chunk| chunk.iter().sum())
        .collect())
}

/// Whether every observation is zero (true for an empty series)
pub fn is_all_zero(series: &[f64]) -> bool {
    series.iter().all(|&v| v == 0.0)
}

/// Mean number of steps between demand events, `None` without any demand
pub fn mean_interval(series: &[f64]) -> Option<f64> {
    let intervals = intervals(series);
    if intervals.is_empty() {
        return None;
    }
    Some(intervals.iter().sum::<f64>() / intervals.len() as f64)
}

/// Aggregation level for temporal aggregation models
///
/// The mean interval rounded half to even, so a mean of 2.5 aggregates in
/// pairs and 3.5 in fours. Always at least 1 when present.
pub fn aggregation_level(series: &[f64]) -> Option<usize> {
    mean_interval(series).map(|mean| mean.round_ties_even() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_keeps_positive_values_in_order() {
        let series = [0.0, 3.0, 0.0, -1.0, 5.0, 2.0, 0.0];
        assert_eq!(demand(&series), vec![3.0, 5.0, 2.0]);
    }

    #[test]
    fn test_demand_empty_for_zero_series() {
        assert!(demand(&[0.0, 0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_intervals() {
        let series = [0.0, 0.0, 3.0, 0.0, 1.0, 4.0, 0.0, 0.0, 0.0, 2.0];
        assert_eq!(intervals(&series), vec![3.0, 2.0, 1.0, 4.0]);
    }

    #[test]
    fn test_intervals_leading_demand_and_trailing_zeros() {
        // Trailing zeros after the last demand event are not counted.
        let series = [5.0, 0.0, 2.0, 0.0, 0.0];
        assert_eq!(intervals(&series), vec![1.0, 2.0]);
    }

    #[test]
    fn test_intervals_count_negative_values_as_events() {
        let series = [0.0, -2.0, 0.0, 1.0];
        assert_eq!(intervals(&series), vec![2.0, 2.0]);
    }

    #[test]
    fn test_probability() {
        let series = [0.0, 3.0, 0.0, -1.0, 0.5];
        assert_eq!(probability(&series), vec![0.0, 1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_chunk_sums_exact_multiple() {
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert_eq!(chunk_sums(&series, 2).unwrap(), vec![3.0, 7.0, 11.0]);
        assert_eq!(chunk_sums(&series, 3).unwrap(), vec![6.0, 15.0]);
    }

    #[test]
    fn test_chunk_sums_drops_remainder_from_front() {
        let series = [100.0, 1.0, 2.0, 3.0, 4.0];
        // 5 % 2 == 1, so the leading 100 is dropped
        assert_eq!(chunk_sums(&series, 2).unwrap(), vec![3.0, 7.0]);
        // 5 % 3 == 2
        assert_eq!(chunk_sums(&series, 3).unwrap(), vec![9.0]);
    }

    #[test]
    fn test_chunk_sums_chunk_larger_than_series() {
        let series = [1.0, 2.0];
        assert!(chunk_sums(&series, 3).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_sums_unit_chunks_is_identity() {
        let series = [4.0, 0.0, 7.0];
        assert_eq!(chunk_sums(&series, 1).unwrap(), series.to_vec());
    }

    #[test]
    fn test_chunk_sums_zero_size() {
        assert!(matches!(
            chunk_sums(&[1.0], 0),
            Err(ForecastError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_is_all_zero() {
        assert!(is_all_zero(&[0.0, 0.0]));
        assert!(is_all_zero(&[]));
        assert!(!is_all_zero(&[0.0, 1e-9]));
    }

    #[test]
    fn test_aggregation_level_rounds_half_to_even() {
        // intervals [2, 3] -> mean 2.5 -> 2
        assert_eq!(aggregation_level(&[0.0, 1.0, 0.0, 0.0, 1.0]), Some(2));
        // intervals [3, 4] -> mean 3.5 -> 4
        assert_eq!(
            aggregation_level(&[0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]),
            Some(4)
        );
        // intervals [1, 1, 2] -> mean 1.33 -> 1
        assert_eq!(aggregation_level(&[1.0, 1.0, 0.0, 1.0]), Some(1));
    }

    #[test]
    fn test_aggregation_level_without_demand() {
        assert_eq!(aggregation_level(&[0.0, 0.0]), None);
        assert_eq!(mean_interval(&[]), None);
    }
}
