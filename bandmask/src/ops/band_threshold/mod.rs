mod cpu;

#[cfg(test)]
mod tests;

use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::common::{Error, Result, Sample};

/// Lower and upper bounds of the half-open intensity band `[low, high)`.
///
/// The defaults were tuned on normalized grayscale data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandThreshold {
    /// Inclusive lower bound.
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
}

impl Default for BandThreshold {
    fn default() -> Self {
        Self {
            low: 0.3,
            high: 0.4,
        }
    }
}

impl BandThreshold {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Builder method to set the lower bound.
    pub fn low(mut self, low: f64) -> Self {
        self.low = low;
        self
    }

    /// Builder method to set the upper bound.
    pub fn high(mut self, high: f64) -> Self {
        self.high = high;
        self
    }

    /// Returns true if `value` lies in `[low, high)`.
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value < self.high
    }

    /// Checks that both bounds are finite and ordered.
    ///
    /// [`segment`] never calls this; callers that want to reject reversed
    /// bands do so explicitly.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(Error::NonFiniteThreshold {
                low: self.low,
                high: self.high,
            });
        }
        if self.low > self.high {
            return Err(Error::ReversedThresholds {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Builds a mask marking elements of `input` that fall inside the band.
    ///
    /// Each output element is `step(x >= low) - step(x >= high)`:
    /// `1` inside `[low, high)`, `0` outside. The output has the shape of
    /// the input. NaN elements stay NaN. With reversed bounds the step
    /// difference is kept as is, so elements in `[high, low)` become `-1`.
    pub fn segment<S, D, M>(&self, input: &ArrayBase<S, D>) -> Array<M, D>
    where
        S: Data,
        S::Elem: Sample,
        D: Dimension,
        M: Float + Send + Sync,
    {
        let mut mask = Array::<M, D>::zeros(input.raw_dim());
        cpu::fill(self, input, &mut mask);
        mask
    }

    /// Writes the band mask of `input` into an existing `output` array.
    ///
    /// # Errors
    /// Returns [`Error::ShapeMismatch`] if the shapes differ.
    pub fn apply<S, SO, D, M>(
        &self,
        input: &ArrayBase<S, D>,
        output: &mut ArrayBase<SO, D>,
    ) -> Result<()>
    where
        S: Data,
        S::Elem: Sample,
        SO: DataMut<Elem = M>,
        D: Dimension,
        M: Float + Send + Sync,
    {
        if input.shape() != output.shape() {
            return Err(Error::ShapeMismatch {
                expected: input.shape().to_vec(),
                actual: output.shape().to_vec(),
            });
        }

        cpu::fill(self, input, output);

        Ok(())
    }

    /// Flat-buffer variant of [`BandThreshold::apply`].
    pub fn apply_slice<T, M>(&self, input: &[T], output: &mut [M]) -> Result<()>
    where
        T: Sample,
        M: Float + Send + Sync,
    {
        if input.len() != output.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![input.len()],
                actual: vec![output.len()],
            });
        }

        cpu::fill_slice(self, input, output);

        Ok(())
    }
}

impl TryFrom<&[f64]> for BandThreshold {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match values {
            [low, high] => Ok(Self::new(*low, *high)),
            _ => Err(Error::ThresholdCount(values.len())),
        }
    }
}

impl From<(f64, f64)> for BandThreshold {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

/// Marks elements of `img` inside `[thresholds.low, thresholds.high)`.
pub fn segment<S, D, M>(img: &ArrayBase<S, D>, thresholds: &BandThreshold) -> Array<M, D>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
    M: Float + Send + Sync,
{
    thresholds.segment(img)
}

/// [`segment`] with the default `[0.3, 0.4)` band.
pub fn segment_default<S, D, M>(img: &ArrayBase<S, D>) -> Array<M, D>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
    M: Float + Send + Sync,
{
    BandThreshold::default().segment(img)
}
