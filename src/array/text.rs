use crate::prelude::*;
use crate::traits::{check_ids, check_mean_ids};

/// Array container for string attribute data such as material names
///
/// Strings have no meaningful mean: a tuple created by interpolation holds empty
/// strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextArray {
    components: usize,
    // tuple count, independent of `components` which may be 0
    tuples: usize,
    values: Vec<String>,
}

impl TextArray {
    /// An array with no tuples and `components` strings per tuple
    pub fn empty(components: usize) -> Self {
        Self {
            components,
            tuples: 0,
            values: Vec::new(),
        }
    }

    /// Build a single component array, one tuple per string
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self {
            components: 1,
            tuples: values.len(),
            values,
        }
    }

    /// one tuple of the array, if it exists
    pub fn tuple(&self, id: usize) -> Option<&[String]> {
        if id >= self.tuples {
            return None;
        }
        let start = id * self.components;
        self.values.get(start..start + self.components)
    }

    /// Append a tuple. `tuple` must hold exactly `num_components` strings.
    pub fn push_tuple<S: Into<String>>(&mut self, tuple: Vec<S>) -> Result<(), DecomposeError> {
        if tuple.len() != self.components {
            return Err(ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
        }
        self.values.extend(tuple.into_iter().map(Into::into));
        self.tuples += 1;
        Ok(())
    }
}

impl Interpolate for TextArray {
    fn num_tuples(&self) -> usize {
        self.tuples
    }

    fn num_components(&self) -> usize {
        self.components
    }

    fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError> {
        check_mean_ids(ids, self.num_tuples())?;
        self.values
            .extend(std::iter::repeat(String::new()).take(self.components));
        self.tuples += 1;
        Ok(())
    }

    fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError> {
        check_ids(ids, self.num_tuples())?;

        let mut out = self.empty_like();
        for id in ids {
            let start = id * self.components;
            out.values
                .extend_from_slice(&self.values[start..start + self.components]);
        }
        out.tuples = ids.len();

        Ok(out)
    }

    fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError> {
        if other.components != self.components {
            return Err(ndarray::ShapeError::from_kind(ndarray::ErrorKind::IncompatibleShape).into());
        }
        self.values.extend_from_slice(&other.values);
        self.tuples += other.tuples;
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::empty(self.components)
    }
}
