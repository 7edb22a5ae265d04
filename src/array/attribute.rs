use super::{BitArray, NumericArray, TextArray};
use crate::prelude::*;

/// A numeric container of any supported precision
#[derive(Debug, Clone, PartialEq, From)]
pub enum NumericData {
    Float32(NumericArray<f32>),
    Float64(NumericArray<f64>),
    Int8(NumericArray<i8>),
    Int16(NumericArray<i16>),
    Int32(NumericArray<i32>),
    Int64(NumericArray<i64>),
    UInt8(NumericArray<u8>),
    UInt16(NumericArray<u16>),
    UInt32(NumericArray<u32>),
    UInt64(NumericArray<u64>),
}

/// A container whose values cannot be averaged
#[derive(Debug, Clone, PartialEq, From)]
pub enum OpaqueData {
    Text(TextArray),
    Bit(BitArray),
}

/// Storage of an [`AttributeArray`], split by whether tuples can be averaged.
///
/// The split is fixed when the array is built, so interpolating a row never has to
/// inspect values to decide what to do.
#[derive(Debug, Clone, PartialEq, From)]
pub enum ArrayData {
    Averageable(NumericData),
    NonAveragable(OpaqueData),
}

/// Element type of an attribute array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ArrayKind {
    #[display(fmt = "{_0}")]
    Numeric(Precision),
    #[display(fmt = "String")]
    Text,
    #[display(fmt = "Bit")]
    Bit,
}

/// Numeric element types that have a matching [`NumericData`] variant
pub trait NumericStorage: Numeric {
    fn wrap(arr: NumericArray<Self>) -> NumericData;

    fn downcast(data: &NumericData) -> Option<&NumericArray<Self>>;
}

macro_rules! impl_numeric_storage {
    ($ty:ty, $variant:ident) => {
        impl NumericStorage for $ty {
            fn wrap(arr: NumericArray<Self>) -> NumericData {
                NumericData::$variant(arr)
            }

            fn downcast(data: &NumericData) -> Option<&NumericArray<Self>> {
                match data {
                    NumericData::$variant(arr) => Some(arr),
                    _ => None,
                }
            }
        }
    };
}

impl_numeric_storage!(f32, Float32);
impl_numeric_storage!(f64, Float64);
impl_numeric_storage!(i8, Int8);
impl_numeric_storage!(i16, Int16);
impl_numeric_storage!(i32, Int32);
impl_numeric_storage!(i64, Int64);
impl_numeric_storage!(u8, UInt8);
impl_numeric_storage!(u16, UInt16);
impl_numeric_storage!(u32, UInt32);
impl_numeric_storage!(u64, UInt64);

macro_rules! with_numeric {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            NumericData::Float32($arr) => $body,
            NumericData::Float64($arr) => $body,
            NumericData::Int8($arr) => $body,
            NumericData::Int16($arr) => $body,
            NumericData::Int32($arr) => $body,
            NumericData::Int64($arr) => $body,
            NumericData::UInt8($arr) => $body,
            NumericData::UInt16($arr) => $body,
            NumericData::UInt32($arr) => $body,
            NumericData::UInt64($arr) => $body,
        }
    };
}

macro_rules! with_array {
    ($data:expr, $arr:ident => $body:expr) => {
        match $data {
            ArrayData::Averageable(numeric) => with_numeric!(numeric, $arr => $body),
            ArrayData::NonAveragable(OpaqueData::Text($arr)) => $body,
            ArrayData::NonAveragable(OpaqueData::Bit($arr)) => $body,
        }
    };
}

fn extend_numeric<NUM: NumericStorage>(
    dst: &mut NumericArray<NUM>,
    src: &NumericData,
) -> Option<Result<(), DecomposeError>> {
    NUM::downcast(src).map(|src| dst.extend_from(src))
}

/// A named attribute array holding one tuple per point or per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArray {
    name: String,
    data: ArrayData,
}

impl AttributeArray {
    pub fn new<S: Into<String>, D: Into<ArrayData>>(name: S, data: D) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    /// An averageable array of any supported numeric precision
    pub fn numeric<S: Into<String>, NUM: NumericStorage>(name: S, arr: NumericArray<NUM>) -> Self {
        Self::new(name, NUM::wrap(arr))
    }

    /// A single component `f64` array, the most common attribute layout
    pub fn scalars<S: Into<String>>(name: S, values: Vec<f64>) -> Self {
        Self::numeric(name, NumericArray::from_scalars(values))
    }

    pub fn text<S: Into<String>>(name: S, arr: TextArray) -> Self {
        Self::new(name, OpaqueData::Text(arr))
    }

    pub fn bit<S: Into<String>>(name: S, arr: BitArray) -> Self {
        Self::new(name, OpaqueData::Bit(arr))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    pub fn kind(&self) -> ArrayKind {
        match &self.data {
            ArrayData::Averageable(numeric) => {
                ArrayKind::Numeric(with_numeric!(numeric, arr => arr.precision()))
            }
            ArrayData::NonAveragable(OpaqueData::Text(_)) => ArrayKind::Text,
            ArrayData::NonAveragable(OpaqueData::Bit(_)) => ArrayKind::Bit,
        }
    }

    pub fn is_averageable(&self) -> bool {
        matches!(self.data, ArrayData::Averageable(_))
    }

    /// the numeric container, if this array stores `NUM` values
    pub fn as_numeric<NUM: NumericStorage>(&self) -> Option<&NumericArray<NUM>> {
        match &self.data {
            ArrayData::Averageable(numeric) => NUM::downcast(numeric),
            ArrayData::NonAveragable(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextArray> {
        match &self.data {
            ArrayData::NonAveragable(OpaqueData::Text(arr)) => Some(arr),
            _ => None,
        }
    }

    pub fn as_bit(&self) -> Option<&BitArray> {
        match &self.data {
            ArrayData::NonAveragable(OpaqueData::Bit(arr)) => Some(arr),
            _ => None,
        }
    }

    /// short description of the layout used in error messages, e.g. `Float64 x 3`
    fn layout(&self) -> String {
        format!("{} x {}", self.kind(), self.num_components())
    }

    fn mismatch(&self, other: &Self) -> DecomposeError {
        AttributeKindMismatch::new(self.name.clone(), self.layout(), other.layout()).into()
    }

    /// tuples of `other` can be appended to this array
    pub(crate) fn check_compatible(&self, other: &Self) -> Result<(), DecomposeError> {
        if self.name != other.name
            || self.kind() != other.kind()
            || self.num_components() != other.num_components()
        {
            return Err(self.mismatch(other));
        }
        Ok(())
    }
}

impl Interpolate for AttributeArray {
    fn num_tuples(&self) -> usize {
        with_array!(&self.data, arr => arr.num_tuples())
    }

    fn num_components(&self) -> usize {
        with_array!(&self.data, arr => arr.num_components())
    }

    fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError> {
        with_array!(&mut self.data, arr => arr.push_interpolated(ids))
    }

    fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError> {
        let data: ArrayData = match &self.data {
            ArrayData::Averageable(numeric) => {
                with_numeric!(numeric, arr => NumericData::from(arr.gather(ids)?)).into()
            }
            ArrayData::NonAveragable(OpaqueData::Text(arr)) => OpaqueData::Text(arr.gather(ids)?).into(),
            ArrayData::NonAveragable(OpaqueData::Bit(arr)) => OpaqueData::Bit(arr.gather(ids)?).into(),
        };

        Ok(Self::new(self.name.clone(), data))
    }

    fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError> {
        self.check_compatible(other)?;

        let merged = match (&mut self.data, &other.data) {
            (ArrayData::Averageable(dst), ArrayData::Averageable(src)) => {
                with_numeric!(dst, arr => extend_numeric(arr, src))
            }
            (
                ArrayData::NonAveragable(OpaqueData::Text(dst)),
                ArrayData::NonAveragable(OpaqueData::Text(src)),
            ) => Some(dst.extend_from(src)),
            (
                ArrayData::NonAveragable(OpaqueData::Bit(dst)),
                ArrayData::NonAveragable(OpaqueData::Bit(src)),
            ) => Some(dst.extend_from(src)),
            _ => None,
        };

        match merged {
            Some(result) => result,
            None => Err(self.mismatch(other)),
        }
    }

    fn empty_like(&self) -> Self {
        let data: ArrayData = match &self.data {
            ArrayData::Averageable(numeric) => {
                with_numeric!(numeric, arr => NumericData::from(arr.empty_like())).into()
            }
            ArrayData::NonAveragable(OpaqueData::Text(arr)) => OpaqueData::Text(arr.empty_like()).into(),
            ArrayData::NonAveragable(OpaqueData::Bit(arr)) => OpaqueData::Bit(arr.empty_like()).into(),
        };

        Self::new(self.name.clone(), data)
    }
}
