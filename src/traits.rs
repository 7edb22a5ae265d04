//! # Traits
//!
//! These are the general purpose traits that the attribute containers are built on.
//! [`Numeric`] describes the element types that can be averaged, and [`Interpolate`]
//! is the row-level interface the decomposition routines use to grow an attribute
//! array in lock-step with the mesh that owns it.
//!
//! Every attribute container in [`array`](crate::array) implements [`Interpolate`].
//! Numeric containers compute a real mean, while text and bit containers fill new
//! rows with their default value.

use crate::prelude::*;
use num_traits::{Bounded, NumCast, ToPrimitive, Zero};

/// Storage type tag of a numeric attribute array.
///
/// The names follow the `type` attribute of a VTK `DataArray` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Precision {
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
}

/// Element types that support component-wise arithmetic means.
///
/// Means are always accumulated in `f64` and converted back to the storage type with
/// [`Numeric::from_mean`].
pub trait Numeric:
    Copy + Default + std::fmt::Debug + PartialEq + Send + Sync + ToPrimitive + NumCast + Bounded + Zero + 'static
{
    /// the precision tag matching this element type
    fn as_precision() -> Precision;

    /// widen the value to `f64` for accumulation
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(0.0)
    }

    /// convert an averaged value back to the storage type
    fn from_mean(mean: f64) -> Self;
}

macro_rules! impl_numeric_float {
    ($ty:ty, $precision:ident) => {
        impl Numeric for $ty {
            fn as_precision() -> Precision {
                Precision::$precision
            }

            fn from_mean(mean: f64) -> Self {
                <$ty as NumCast>::from(mean).unwrap_or_else(Zero::zero)
            }
        }
    };
}

macro_rules! impl_numeric_int {
    ($ty:ty, $precision:ident) => {
        impl Numeric for $ty {
            fn as_precision() -> Precision {
                Precision::$precision
            }

            // round half away from zero, saturate at the bounds of the type
            fn from_mean(mean: f64) -> Self {
                if mean.is_nan() {
                    return Zero::zero();
                }

                let rounded = mean.round();

                <$ty as NumCast>::from(rounded).unwrap_or_else(|| {
                    if rounded < 0.0 {
                        <$ty as Bounded>::min_value()
                    } else {
                        <$ty as Bounded>::max_value()
                    }
                })
            }
        }
    };
}

impl_numeric_float!(f32, Float32);
impl_numeric_float!(f64, Float64);
impl_numeric_int!(i8, Int8);
impl_numeric_int!(i16, Int16);
impl_numeric_int!(i32, Int32);
impl_numeric_int!(i64, Int64);
impl_numeric_int!(u8, UInt8);
impl_numeric_int!(u16, UInt16);
impl_numeric_int!(u32, UInt32);
impl_numeric_int!(u64, UInt64);

/// Row-level operations on an attribute container.
///
/// A "tuple" is one row of the container: `num_components` values belonging to the
/// same point or cell.
pub trait Interpolate: Sized {
    /// number of tuples (rows) currently stored
    fn num_tuples(&self) -> usize;

    /// number of values in every tuple
    fn num_components(&self) -> usize;

    /// Append one tuple derived from the tuples at `ids`.
    ///
    /// Numeric containers append the unweighted mean of the selected tuples. Containers
    /// without a meaningful mean append their default value instead. Fails if `ids` is
    /// empty or references a tuple that does not exist.
    fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError>;

    /// Build a new container holding copies of the tuples at `ids`, in order.
    /// Indices may repeat.
    fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError>;

    /// Append every tuple of `other` to the end of this container.
    ///
    /// Both containers must have the same number of components.
    fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError>;

    /// An empty container with the same element type and component count.
    fn empty_like(&self) -> Self;
}

/// verify that `ids` can be used to index a container with `len` tuples
pub(crate) fn check_ids(ids: &[usize], len: usize) -> Result<(), DecomposeError> {
    match ids.iter().find(|id| **id >= len) {
        Some(index) => Err(IndexOutOfRange::new(*index, len).into()),
        None => Ok(()),
    }
}

/// like [`check_ids`], but a mean over no tuples is rejected as well
pub(crate) fn check_mean_ids(ids: &[usize], len: usize) -> Result<(), DecomposeError> {
    if ids.is_empty() {
        return Err(EmptyIndexSet.into());
    }
    check_ids(ids, len)
}
