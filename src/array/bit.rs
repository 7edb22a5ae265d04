use crate::prelude::*;
use crate::traits::{check_ids, check_mean_ids};

/// Bit packed boolean attribute data, such as ghost or selection flags
///
/// Bits are packed most significant bit first, eight values per byte. Booleans
/// have no meaningful mean: a tuple created by interpolation is cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BitArray {
    components: usize,
    // tuple count, independent of `components` which may be 0
    tuples: usize,
    // number of bits in use, the tail of the last byte is always zero
    len: usize,
    bytes: Vec<u8>,
}

impl BitArray {
    /// An array with no tuples and `components` bits per tuple
    pub fn empty(components: usize) -> Self {
        Self {
            components,
            tuples: 0,
            len: 0,
            bytes: Vec::new(),
        }
    }

    /// Build a single component array, one tuple per flag
    pub fn from_bools<I: IntoIterator<Item = bool>>(values: I) -> Self {
        let mut arr = Self::empty(1);
        values.into_iter().for_each(|bit| arr.push_bit(bit));
        arr.tuples = arr.len;
        arr
    }

    /// value of one component of one tuple, if it exists
    pub fn get(&self, tuple: usize, component: usize) -> Option<bool> {
        if component >= self.components || tuple >= self.num_tuples() {
            return None;
        }
        Some(self.bit(tuple * self.components + component))
    }

    /// Append a tuple. `tuple` must hold exactly `num_components` flags.
    pub fn push_tuple(&mut self, tuple: &[bool]) -> Result<(), DecomposeError> {
        if tuple.len() != self.components {
            return Err(ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
        }
        tuple.iter().for_each(|bit| self.push_bit(*bit));
        self.tuples += 1;
        Ok(())
    }

    /// the packed storage
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn bit(&self, index: usize) -> bool {
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    fn push_bits_of(&mut self, other: &Self, tuple: usize) {
        let start = tuple * other.components;
        (start..start + other.components).for_each(|index| self.push_bit(other.bit(index)));
        self.tuples += 1;
    }
}

impl Interpolate for BitArray {
    fn num_tuples(&self) -> usize {
        self.tuples
    }

    fn num_components(&self) -> usize {
        self.components
    }

    fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError> {
        check_mean_ids(ids, self.num_tuples())?;
        (0..self.components).for_each(|_| self.push_bit(false));
        self.tuples += 1;
        Ok(())
    }

    fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError> {
        check_ids(ids, self.num_tuples())?;

        let mut out = self.empty_like();
        ids.iter().for_each(|id| out.push_bits_of(self, *id));

        Ok(out)
    }

    fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError> {
        if other.components != self.components {
            return Err(ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
        }
        (0..other.num_tuples()).for_each(|tuple| self.push_bits_of(other, tuple));
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::empty(self.components)
    }
}
