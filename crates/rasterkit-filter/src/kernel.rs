//! Convolution kernels
//!
//! A [`Kernel`] is an odd-sided square matrix of weights stored row-major.
//! The center cell sits at `(side / 2, side / 2)`. Constructors validate
//! the shape, so a `Kernel` value is always well-formed and convolution
//! never has to check it.

use crate::{FilterError, FilterResult};

/// Weights of the built-in 3x3 sharpening kernel
pub const SHARPEN_WEIGHTS: [f64; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// A square convolution kernel with an odd side length
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Side length (odd, >= 1)
    side: u32,
    /// Kernel weights (row-major, `side * side` values)
    weights: Vec<f64>,
}

impl Kernel {
    /// Largest accepted side length
    pub const MAX_SIDE: u32 = 255;

    /// Create a kernel from a flat slice of weights.
    ///
    /// The side is `round(sqrt(len))`; the slice length must equal `side²`
    /// and the side must be odd.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for an empty slice, a length
    /// that is not a perfect square, an even side, or a side above
    /// [`Kernel::MAX_SIDE`].
    pub fn from_slice(weights: &[f64]) -> FilterResult<Self> {
        if weights.is_empty() {
            return Err(FilterError::InvalidKernel("no weights".into()));
        }
        let side = (weights.len() as f64).sqrt().round() as u32;
        if side as usize * side as usize != weights.len() {
            return Err(FilterError::InvalidKernel(format!(
                "{} weights do not form a square matrix",
                weights.len()
            )));
        }
        Self::check_side(side)?;
        Ok(Self {
            side,
            weights: weights.to_vec(),
        })
    }

    /// Create a kernel from integer weights.
    pub fn from_ints(weights: &[i32]) -> FilterResult<Self> {
        let w: Vec<f64> = weights.iter().map(|&v| v as f64).collect();
        Self::from_slice(&w)
    }

    /// The 3x3 sharpening kernel `[0,-1,0, -1,5,-1, 0,-1,0]`.
    pub fn sharpen() -> Self {
        Self {
            side: 3,
            weights: SHARPEN_WEIGHTS.to_vec(),
        }
    }

    /// Identity kernel: 1 at the center, 0 elsewhere.
    pub fn identity(side: u32) -> FilterResult<Self> {
        Self::check_side(side)?;
        let n = side as usize;
        let mut weights = vec![0.0; n * n];
        weights[(n / 2) * n + n / 2] = 1.0;
        Ok(Self { side, weights })
    }

    /// Box (averaging) kernel: every weight is `1 / side²`.
    pub fn box_kernel(side: u32) -> FilterResult<Self> {
        Self::check_side(side)?;
        let n = side as usize * side as usize;
        Ok(Self {
            side,
            weights: vec![1.0 / n as f64; n],
        })
    }

    fn check_side(side: u32) -> FilterResult<()> {
        if side == 0 || side % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "side must be odd and positive, got {side}"
            )));
        }
        if side > Self::MAX_SIDE {
            return Err(FilterError::InvalidKernel(format!(
                "side {side} exceeds maximum {}",
                Self::MAX_SIDE
            )));
        }
        Ok(())
    }

    /// Side length.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Offset from a corner to the center, `side / 2`.
    #[inline]
    pub fn half(&self) -> u32 {
        self.side / 2
    }

    /// All weights, row-major.
    #[inline]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Weight at column `kx`, row `ky`.
    #[inline]
    pub fn get(&self, kx: u32, ky: u32) -> Option<f64> {
        if kx >= self.side || ky >= self.side {
            return None;
        }
        Some(self.weights[(ky * self.side + kx) as usize])
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}
