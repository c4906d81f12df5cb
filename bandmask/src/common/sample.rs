/// An array element that can be read as a normalized intensity.
///
/// Float samples are compared at their own precision so that a threshold
/// written as `0.3` matches an `f32` pixel holding `0.3`. Integer samples
/// are scaled by their type maximum before comparison.
pub trait Sample: Copy + Send + Sync {
    /// Returns true when the sample is at or above `threshold`.
    fn reaches(self, threshold: f64) -> bool;

    fn is_nan(self) -> bool {
        false
    }
}

impl Sample for u8 {
    #[inline]
    fn reaches(self, threshold: f64) -> bool {
        self as f64 / Self::MAX as f64 >= threshold
    }
}

impl Sample for u16 {
    #[inline]
    fn reaches(self, threshold: f64) -> bool {
        self as f64 / Self::MAX as f64 >= threshold
    }
}

impl Sample for f32 {
    #[inline]
    fn reaches(self, threshold: f64) -> bool {
        self >= threshold as f32
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl Sample for f64 {
    #[inline]
    fn reaches(self, threshold: f64) -> bool {
        self >= threshold
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}
