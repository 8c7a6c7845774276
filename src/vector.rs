/// Two-dimensional vector used for every position, velocity, acceleration and force.
///
/// It is a plain `Copy` value: every operation returns a new vector and nothing is aliased.
pub type Vector2 = glam::DVec2;

/// Types that can be compared for equality and have a default value considered as their 'zero'.
pub trait Scalar: Copy + Default + PartialEq {}
impl<S: Copy + Default + PartialEq> Scalar for S {}

/// Vector operations the simulation relies on, on top of the arithmetic operators.
///
/// Addition, subtraction and scaling come from the operators of the underlying type.
pub trait Vector: Copy {
    /// Type of the components of the vector.
    type Scalar: Scalar;

    /// Euclidean length of the vector.
    fn magnitude(self) -> Self::Scalar;

    /// Unit vector with the same direction.
    ///
    /// Returns the zero vector when the length is zero (or not finite) instead of producing NaN.
    fn normalized(self) -> Self;

    /// Divides every component by `rhs`, or returns `None` if `rhs` is zero.
    fn checked_div(self, rhs: Self::Scalar) -> Option<Self>;
}

macro_rules! impl_vector {
    ($s: ty, $v: ty) => {
        impl Vector for $v {
            type Scalar = $s;

            #[inline]
            fn magnitude(self) -> $s {
                self.length()
            }

            #[inline]
            fn normalized(self) -> Self {
                self.normalize_or_zero()
            }

            #[inline]
            fn checked_div(self, rhs: $s) -> Option<Self> {
                if rhs == <$s>::default() {
                    None
                } else {
                    Some(self / rhs)
                }
            }
        }
    };
}

impl_vector!(f32, glam::Vec2);
impl_vector!(f64, glam::DVec2);
