/// Newton-Raphson settings for the maximum likelihood search.
#[derive(Debug, Clone, Copy)]
pub struct LogitOptions {
    /// convergence threshold on the gradient infinity norm.
    pub tolerance: f64,
    /// iteration cap before reporting non-convergence.
    pub max_iterations: usize,
    /// magnitude at which a coefficient is treated as diverging, the
    /// symptom of separation in the data.
    pub divergence_bound: f64,
}

impl Default for LogitOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 100,
            divergence_bound: 1e3,
        }
    }
}
