use ndarray::{ArrayBase, Data, DataMut, Dimension, Zip};
use num_traits::Float;
use rayon::prelude::*;

use super::BandThreshold;
use crate::common::Sample;

/// Arrays shorter than this are filled on the calling thread.
const PARALLEL_MIN_LEN: usize = 64 * 1024;
const CHUNK_LEN: usize = 16 * 1024;

/// Two-sided step difference for a single element.
#[inline]
fn band_value<T: Sample, M: Float>(x: T, low: f64, high: f64) -> M {
    if x.is_nan() {
        return M::nan();
    }

    match (x.reaches(low), x.reaches(high)) {
        (true, false) => M::one(),
        (false, true) => -M::one(),
        _ => M::zero(),
    }
}

pub(super) fn fill<S, SO, D, M>(
    params: &BandThreshold,
    input: &ArrayBase<S, D>,
    output: &mut ArrayBase<SO, D>,
) where
    S: Data,
    S::Elem: Sample,
    SO: DataMut<Elem = M>,
    D: Dimension,
    M: Float + Send + Sync,
{
    debug_assert_eq!(input.shape(), output.shape(), "shape mismatch");

    let low = params.low;
    let high = params.high;
    let parallel = input.len() >= PARALLEL_MIN_LEN;

    log::trace!(
        "band mask [{}, {}) over shape {:?} (parallel: {})",
        low,
        high,
        input.shape(),
        parallel
    );

    let zip = Zip::from(output).and(input);
    if parallel {
        zip.par_for_each(|out, &x| *out = band_value(x, low, high));
    } else {
        zip.for_each(|out, &x| *out = band_value(x, low, high));
    }
}

pub(super) fn fill_slice<T, M>(params: &BandThreshold, input: &[T], output: &mut [M])
where
    T: Sample,
    M: Float + Send + Sync,
{
    debug_assert_eq!(input.len(), output.len(), "length mismatch");

    let low = params.low;
    let high = params.high;

    if input.len() < PARALLEL_MIN_LEN {
        fill_chunk(input, output, low, high);
        return;
    }

    output
        .par_chunks_mut(CHUNK_LEN)
        .zip(input.par_chunks(CHUNK_LEN))
        .for_each(|(out, inp)| fill_chunk(inp, out, low, high));
}

#[inline]
fn fill_chunk<T: Sample, M: Float>(input: &[T], output: &mut [M], low: f64, high: f64) {
    for (out, &x) in output.iter_mut().zip(input) {
        *out = band_value(x, low, high);
    }
}
