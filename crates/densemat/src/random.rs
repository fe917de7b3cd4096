use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matrix::Matrix;

impl Matrix {
    /// New matrix of the same shape filled with uniform random values.
    ///
    /// Each element is drawn as `u * |high - low| + low` with `u` uniform in
    /// `[0, 1)`, so for `low <= high` the values lie in `[low, high)`.
    ///
    /// # Arguments
    ///
    /// * `low` - Lower bound of the range.
    /// * `high` - Upper bound of the range.
    /// * `rng` - The random number generator to draw from.
    ///
    /// # Example
    ///
    /// ```
    /// use densemat::Matrix;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let m = Matrix::new(3, 3).randomize_between(-1.0, 1.0, &mut rng);
    /// assert!(m.as_slice().iter().all(|&v| (-1.0..1.0).contains(&v)));
    /// ```
    pub fn randomize_between<R>(&self, low: f64, high: f64, rng: &mut R) -> Matrix
    where
        R: Rng + ?Sized,
    {
        let width = (high - low).abs();
        let data = (0..self.numel())
            .map(|_| rng.random::<f64>() * width + low)
            .collect();
        self.with_data(data)
    }

    /// New matrix of the same shape with values drawn uniformly from `[0, high)`.
    pub fn randomize<R>(&self, high: f64, rng: &mut R) -> Matrix
    where
        R: Rng + ?Sized,
    {
        let data = (0..self.numel())
            .map(|_| rng.random::<f64>() * high)
            .collect();
        self.with_data(data)
    }

    /// Same as [`Matrix::randomize_between`] with a generator seeded from `seed`.
    pub fn randomize_seeded(&self, low: f64, high: f64, seed: u64) -> Matrix {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_between(low, high, &mut rng)
    }
}
