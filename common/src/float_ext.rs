/// Default tolerance for [`FloatExt::approximately_eq`].
pub const EPSILON: f64 = 1e-6;

/// Tolerance-based comparison for values that went through lossy
/// arithmetic, such as pixels normalized from integer storage.
pub trait FloatExt: Copy {
    fn approximately_eq_within(self, other: Self, tolerance: f64) -> bool;

    fn approximately_eq(self, other: Self) -> bool {
        self.approximately_eq_within(other, EPSILON)
    }
}

impl FloatExt for f32 {
    fn approximately_eq_within(self, other: Self, tolerance: f64) -> bool {
        ((self - other).abs() as f64) < tolerance
    }
}

impl FloatExt for f64 {
    fn approximately_eq_within(self, other: Self, tolerance: f64) -> bool {
        (self - other).abs() < tolerance
    }
}
