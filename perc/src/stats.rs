use rand::Rng;

use crate::{
    error::{Error, Result},
    grid::Percolation,
};

////////////////////////////////////////////////////////////////////////////////

/// Monte Carlo estimate of the percolation threshold.
///
/// Runs `trials` independent experiments on an `n`-by-`n` grid. Each
/// experiment opens uniformly random sites until the grid percolates and
/// records the fraction of sites open at that moment.
#[derive(Debug)]
pub struct PercolationStats {
    samples: Vec<f64>,
}

impl PercolationStats {
    /// Runs the experiment with a thread-local random source.
    ///
    /// # Arguments
    ///
    /// * `n` - grid side length, must be positive.
    /// * `trials` - number of independent experiments, must be positive.
    pub fn run(n: usize, trials: usize) -> Result<Self> {
        Self::run_with_rng(n, trials, &mut rand::thread_rng())
    }

    /// Runs the experiment with the given random source. Seeding the source
    /// makes the whole run reproducible.
    pub fn run_with_rng(n: usize, trials: usize, rng: &mut impl Rng) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        if trials == 0 {
            return Err(Error::InvalidTrials);
        }

        let mut samples = Vec::with_capacity(trials);
        for _ in 0..trials {
            let mut grid = Percolation::new(n)?;
            while !grid.percolates() {
                let row = rng.gen_range(1..=n);
                let col = rng.gen_range(1..=n);
                // redrawing an already-open site is a harmless no-op
                grid.open(row, col)?;
            }
            samples.push(grid.number_of_open_sites() as f64 / (n * n) as f64);
        }

        Ok(Self { samples })
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Sample standard deviation of the recorded thresholds, with the
    /// `trials - 1` denominator. A single trial gives 0/0 = NaN; that is
    /// the documented behaviour, not a bug.
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares: f64 = self.samples.iter().map(|s| (s - mean).powi(2)).sum();
        (squares / (self.samples.len() - 1) as f64).sqrt()
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_interval()
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_interval()
    }

    fn half_interval(&self) -> f64 {
        1.96 * self.stddev() / (self.samples.len() as f64).sqrt()
    }
}

////////////////////////////////////////////////////////////////////////////////
