use crate::analysis::types::TrendLine;
use crate::analysis::utility::mean;

/// Ordinary least-squares fit of `y = slope * x + intercept`.
///
/// Returns `None` when fewer than two points are given or every `x` is the
/// same, since no line is determined.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> Option<TrendLine> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        sxy += (x - x_mean) * (y - y_mean);
        sxx += (x - x_mean).powi(2);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(TrendLine {
        slope_min_per_km: slope,
        intercept_min: y_mean - slope * x_mean,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let fit = linear_fit(&[1.0, 2.0, 3.0], &[5.0, 7.0, 9.0]).unwrap();

        assert!((fit.slope_min_per_km - 2.0).abs() < 1e-9);
        assert!((fit.intercept_min - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(linear_fit(&[], &[]).is_none());
        assert!(linear_fit(&[4.0], &[10.0]).is_none());
        assert!(linear_fit(&[4.0, 4.0], &[10.0, 12.0]).is_none());
    }
}
