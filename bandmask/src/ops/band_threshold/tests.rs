use ndarray::{arr0, arr1, arr2, Array, Array1, Array2, ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::prelude::*;

// =============================================================================
// Band membership
// =============================================================================

#[test]
fn explicit_band_example() {
    let img = arr1(&[0.1, 0.3, 0.35, 0.4, 0.5]);
    let mask: Array1<f64> = segment(&img, &BandThreshold::new(0.3, 0.4));
    assert_eq!(mask, arr1(&[0.0, 1.0, 1.0, 0.0, 0.0]));
}

#[test]
fn default_band_example() {
    let img = arr1(&[0.29, 0.3, 0.39, 0.4]);
    let mask: Array1<f64> = segment_default(&img);
    assert_eq!(mask, arr1(&[0.0, 1.0, 1.0, 0.0]));
}

#[test]
fn default_band_example_f32_input() {
    let img = arr1(&[0.29f32, 0.3, 0.39, 0.4]);
    let mask: Array1<f32> = segment_default(&img);
    assert_eq!(mask, arr1(&[0.0, 1.0, 1.0, 0.0]));
}

#[test]
fn default_thresholds() {
    let t = BandThreshold::default();
    assert_eq!(t.low, 0.3);
    assert_eq!(t.high, 0.4);
}

#[test]
fn below_inside_above_properties() {
    let t = BandThreshold::new(0.2, 0.6);
    let mut rng = StdRng::seed_from_u64(42);
    let img = Array::from_shape_fn((32, 48), |_| rng.random_range(-0.5f64..1.5));
    let mask: Array2<f32> = t.segment(&img);

    for (&x, &m) in img.iter().zip(mask.iter()) {
        if x < t.low {
            assert_eq!(m, 0.0, "below band: {}", x);
        } else if x < t.high {
            assert_eq!(m, 1.0, "inside band: {}", x);
        } else {
            assert_eq!(m, 0.0, "above band: {}", x);
        }
    }
}

#[test]
fn output_is_binary_for_ordered_thresholds() {
    let mut rng = StdRng::seed_from_u64(3);
    let img = Array::from_shape_fn(IxDyn(&[3, 4, 5, 6]), |_| rng.random::<f32>());
    let mask: ArrayD<f32> = segment_default(&img);
    assert!(mask.iter().all(|&m| m == 0.0 || m == 1.0));
}

#[test]
fn contains_matches_segment() {
    let t = BandThreshold::default();
    assert!(!t.contains(0.29));
    assert!(t.contains(0.3));
    assert!(t.contains(0.399));
    assert!(!t.contains(0.4));
}

// =============================================================================
// Shapes
// =============================================================================

#[test]
fn shape_is_preserved_for_any_dimension() {
    let img2 = Array2::<f64>::zeros((7, 3));
    let mask2: Array2<f32> = segment_default(&img2);
    assert_eq!(mask2.shape(), img2.shape());

    let img4 = ArrayD::<f32>::zeros(IxDyn(&[2, 3, 4, 5]));
    let mask4: ArrayD<f64> = segment_default(&img4);
    assert_eq!(mask4.shape(), img4.shape());
}

#[test]
fn empty_array_gives_empty_mask() {
    let img = Array2::<f64>::zeros((0, 5));
    let mask: Array2<f64> = segment_default(&img);
    assert_eq!(mask.shape(), &[0, 5]);
}

#[test]
fn zero_dimensional_array() {
    let img = arr0(0.35f64);
    let mask: ndarray::Array0<f32> = segment_default(&img);
    assert_eq!(mask[()], 1.0);
}

#[test]
fn input_is_not_modified() {
    let img = arr2(&[[0.1, 0.35], [0.38, 0.9]]);
    let before = img.clone();
    let _: Array2<f64> = segment_default(&img);
    assert_eq!(img, before);
}

#[test]
fn works_on_views() {
    let img = arr2(&[[0.1, 0.35, 0.5], [0.31, 0.39, 0.41]]);
    let column = img.column(1);
    let mask: Array1<f32> = segment_default(&column);
    assert_eq!(mask, arr1(&[1.0, 1.0]));
}

// =============================================================================
// Integer samples
// =============================================================================

#[test]
fn u8_samples_are_normalized() {
    // 76/255 = 0.298, 77/255 = 0.302, 101/255 = 0.396, 102/255 = 0.4
    let img = arr1(&[0u8, 76, 77, 101, 102, 255]);
    let mask: Array1<f32> = segment_default(&img);
    assert_eq!(mask, arr1(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]));
}

#[test]
fn u16_samples_are_normalized() {
    let img = arr1(&[0u16, 19660, 19661, 26213, 26214, u16::MAX]);
    let mask: Array1<f32> = segment_default(&img);
    assert_eq!(mask, arr1(&[0.0, 0.0, 1.0, 1.0, 0.0, 0.0]));
}

// =============================================================================
// Degenerate thresholds and NaN
// =============================================================================

#[test]
fn reversed_thresholds_keep_step_difference() {
    let img = arr1(&[0.2, 0.3, 0.35, 0.4, 0.5]);
    let mask: Array1<f64> = segment(&img, &BandThreshold::new(0.4, 0.3));
    assert_eq!(mask, arr1(&[0.0, -1.0, -1.0, 0.0, 0.0]));
}

#[test]
fn equal_thresholds_give_empty_band() {
    let img = arr1(&[0.2, 0.3, 0.4]);
    let mask: Array1<f64> = segment(&img, &BandThreshold::new(0.3, 0.3));
    assert_eq!(mask, arr1(&[0.0, 0.0, 0.0]));
}

#[test]
fn nan_elements_propagate() {
    let img = arr1(&[f64::NAN, 0.35]);
    let mask: Array1<f64> = segment_default(&img);
    assert!(mask[0].is_nan());
    assert_eq!(mask[1], 1.0);
}

#[test]
fn infinite_bounds() {
    let img = arr1(&[-1e9, 0.0, 1e9]);
    let mask: Array1<f64> = segment(&img, &BandThreshold::new(f64::NEG_INFINITY, 0.0));
    assert_eq!(mask, arr1(&[1.0, 0.0, 0.0]));
}

// =============================================================================
// Construction and validation
// =============================================================================

#[test]
fn try_from_requires_two_values() {
    let pair: &[f64] = &[0.1, 0.9];
    let t = BandThreshold::try_from(pair).unwrap();
    assert_eq!(t, BandThreshold::new(0.1, 0.9));

    let single: &[f64] = &[0.1];
    assert!(matches!(
        BandThreshold::try_from(single),
        Err(Error::ThresholdCount(1))
    ));

    let triple: &[f64] = &[0.1, 0.2, 0.3];
    assert!(matches!(
        BandThreshold::try_from(triple),
        Err(Error::ThresholdCount(3))
    ));

    let empty: &[f64] = &[];
    assert!(matches!(
        BandThreshold::try_from(empty),
        Err(Error::ThresholdCount(0))
    ));
}

#[test]
fn builder_methods() {
    let t = BandThreshold::default().low(0.1).high(0.2);
    assert_eq!(t, BandThreshold::new(0.1, 0.2));
    assert_eq!(BandThreshold::from((0.5, 0.6)), BandThreshold::new(0.5, 0.6));
}

#[test]
fn validate_accepts_ordered_bounds() {
    assert!(BandThreshold::default().validate().is_ok());
    assert!(BandThreshold::new(0.5, 0.5).validate().is_ok());
}

#[test]
fn validate_rejects_reversed_and_non_finite() {
    assert!(matches!(
        BandThreshold::new(0.4, 0.3).validate(),
        Err(Error::ReversedThresholds { .. })
    ));
    assert!(matches!(
        BandThreshold::new(f64::NAN, 0.3).validate(),
        Err(Error::NonFiniteThreshold { .. })
    ));
    assert!(matches!(
        BandThreshold::new(0.0, f64::INFINITY).validate(),
        Err(Error::NonFiniteThreshold { .. })
    ));
}

// =============================================================================
// In-place application
// =============================================================================

#[test]
fn apply_writes_into_output() {
    let img = arr2(&[[0.1, 0.3], [0.35, 0.4]]);
    let mut out = Array2::<f32>::from_elem((2, 2), 7.0);
    BandThreshold::default().apply(&img, &mut out).unwrap();
    assert_eq!(out, arr2(&[[0.0, 1.0], [1.0, 0.0]]));
}

#[test]
fn apply_into_view() {
    let img = arr1(&[0.35, 0.5]);
    let mut out = Array2::<f64>::zeros((2, 2));
    BandThreshold::default()
        .apply(&img, &mut out.row_mut(1))
        .unwrap();
    assert_eq!(out, arr2(&[[0.0, 0.0], [1.0, 0.0]]));
}

#[test]
fn apply_rejects_shape_mismatch() {
    let img = Array2::<f64>::zeros((2, 3));
    let mut out = Array2::<f64>::zeros((3, 2));
    let result = BandThreshold::default().apply(&img, &mut out);
    match result {
        Err(Error::ShapeMismatch { expected, actual }) => {
            assert_eq!(expected, vec![2, 3]);
            assert_eq!(actual, vec![3, 2]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn apply_slice_matches_segment() {
    let values = [0.1f32, 0.3, 0.35, 0.4, 0.5];
    let mut out = [0.0f64; 5];
    BandThreshold::default()
        .apply_slice(&values, &mut out)
        .unwrap();
    assert_eq!(out, [0.0, 1.0, 1.0, 0.0, 0.0]);
}

#[test]
fn apply_slice_rejects_length_mismatch() {
    let mut out = [0.0f64; 2];
    assert!(matches!(
        BandThreshold::default().apply_slice(&[0.1f64, 0.2, 0.3], &mut out),
        Err(Error::ShapeMismatch { .. })
    ));
}
