//! Summary statistics over gap and position samples
//!
//! The layout stage reduces element geometry to small `f64` sample sets;
//! these helpers define the exact conventions it relies on: empty input maps
//! to zero, the median of an even count averages the middle pair, and the
//! standard deviation is the population form.

/// Arithmetic mean, or 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median, or 0.0 for an empty slice
///
/// Even-length input averages the two middle values.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted.get(mid).copied().unwrap_or(0.0)
    } else {
        let low = sorted.get(mid.wrapping_sub(1)).copied().unwrap_or(0.0);
        let high = sorted.get(mid).copied().unwrap_or(0.0);
        f64::midpoint(low, high)
    }
}

/// Population standard deviation, or 0.0 for fewer than two samples
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let dev = v - avg;
            dev * dev
        })
        .sum::<f64>()
        / values.len() as f64;

    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_conventions() {
        assert!(mean(&[]).abs() < f64::EPSILON);
        assert!(median(&[]).abs() < f64::EPSILON);
        assert!(std_dev(&[]).abs() < f64::EPSILON);
        assert!(std_dev(&[5.0]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert!((median(&[3.0, 1.0, 2.0]) - 2.0).abs() < f64::EPSILON);
        assert!((median(&[4.0, 1.0, 3.0, 2.0]) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_std_dev_population_form() {
        // Population variance of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 4
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);

        assert!(std_dev(&[16.0, 16.0, 16.0]).abs() < f64::EPSILON);
    }
}
