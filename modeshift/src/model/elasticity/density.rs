use super::ElasticityError;
use crate::util::stats;
use serde::Serialize;
use statrs::distribution::{Continuous, Normal};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DensityPoint {
    pub value: f64,
    pub density: f64,
}

/// Gaussian kernel density estimate over an evenly spaced grid spanning the
/// sample plus three bandwidths on each side. Bandwidth follows Silverman's
/// rule of thumb on the smaller of the standard deviation and IQR/1.34.
pub fn gaussian_kde(
    values: &[f64],
    grid_size: usize,
) -> Result<Vec<DensityPoint>, ElasticityError> {
    if values.is_empty() {
        return Err(ElasticityError::EmptySample);
    }
    if grid_size < 2 {
        return Err(ElasticityError::InvalidGrid(grid_size));
    }
    let n = values.len() as f64;
    let sd = stats::std_dev(values);
    let iqr = stats::quantile(values, 0.75) - stats::quantile(values, 0.25);
    let spread = if iqr > 0.0 { sd.min(iqr / 1.34) } else { sd };
    if !(spread > 0.0) {
        return Err(ElasticityError::DegenerateSample);
    }
    let bandwidth = 0.9 * spread * n.powf(-0.2);

    let kernel = Normal::new(0.0, 1.0).map_err(|e| ElasticityError::Numeric(e.to_string()))?;
    let lo = stats::quantile(values, 0.0) - 3.0 * bandwidth;
    let hi = stats::quantile(values, 1.0) + 3.0 * bandwidth;
    let step = (hi - lo) / (grid_size - 1) as f64;
    let curve = (0..grid_size)
        .map(|idx| {
            let x = lo + step * idx as f64;
            let density = values
                .iter()
                .map(|v| kernel.pdf((x - v) / bandwidth))
                .sum::<f64>()
                / (n * bandwidth);
            DensityPoint { value: x, density }
        })
        .collect();
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_integrates_to_one() {
        let values: Vec<f64> = (0..50).map(|i| -1.0 + 0.04 * i as f64).collect();
        let curve = gaussian_kde(&values, 256).expect("kde should succeed on a spread sample");
        // trapezoid rule over the grid
        let mut integral = 0.0;
        for pair in curve.windows(2) {
            let width = pair[1].value - pair[0].value;
            integral += 0.5 * width * (pair[0].density + pair[1].density);
        }
        assert!((integral - 1.0).abs() < 0.05, "integral was {}", integral);
    }

    #[test]
    fn test_density_nonnegative() {
        let values = vec![-0.3, -0.2, -0.8, -0.4, -0.6, -0.1];
        let curve = gaussian_kde(&values, 64).expect("kde should succeed");
        assert!(curve.iter().all(|point| point.density >= 0.0));
    }

    #[test]
    fn test_constant_sample_rejected() {
        let values = vec![0.5; 10];
        assert!(matches!(
            gaussian_kde(&values, 64),
            Err(ElasticityError::DegenerateSample)
        ));
    }

    #[test]
    fn test_tiny_grid_rejected() {
        assert!(matches!(
            gaussian_kde(&[0.1, 0.2], 1),
            Err(ElasticityError::InvalidGrid(1))
        ));
    }
}
