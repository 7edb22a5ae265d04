use super::AttributeArray;
use crate::prelude::*;
use crate::traits::check_ids;

/// Ordered set of named attribute arrays attached to the points or the cells of a mesh.
///
/// Every array in a table is expected to have one tuple per point (or cell) of the
/// owning mesh. Row operations on the table apply to every array at once so the
/// arrays grow in lock-step.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeTable {
    arrays: Vec<AttributeArray>,
}

impl AttributeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder style [`insert`](Self::insert)
    pub fn with_array(mut self, array: AttributeArray) -> Self {
        self.insert(array);
        self
    }

    /// Add an array, replacing (and returning) any array with the same name
    pub fn insert(&mut self, array: AttributeArray) -> Option<AttributeArray> {
        match self.arrays.iter_mut().find(|a| a.name() == array.name()) {
            Some(existing) => Some(std::mem::replace(existing, array)),
            None => {
                self.arrays.push(array);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeArray> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AttributeArray> {
        self.arrays.iter()
    }

    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Check that every array holds exactly `expected` tuples
    pub fn check_len(&self, expected: usize) -> Result<(), DecomposeError> {
        for array in &self.arrays {
            let actual = array.num_tuples();
            if actual != expected {
                return Err(
                    AttributeLengthMismatch::new(array.name().to_string(), expected, actual).into(),
                );
            }
        }
        Ok(())
    }

    /// Append one interpolated tuple to every array, see [`Interpolate::push_interpolated`]
    pub fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError> {
        self.arrays
            .iter_mut()
            .try_for_each(|array| array.push_interpolated(ids))
    }

    /// A table with the same arrays holding only the tuples at `ids`
    pub fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError> {
        let arrays = self
            .arrays
            .iter()
            .map(|array| array.gather(ids))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { arrays })
    }

    /// A table with the same arrays and no tuples
    pub fn empty_like(&self) -> Self {
        Self {
            arrays: self.arrays.iter().map(Interpolate::empty_like).collect(),
        }
    }

    /// Append the tuples of `other` to the arrays of the same name.
    ///
    /// Both tables must hold the same arrays in the same order, with the same element
    /// types and component counts.
    pub fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError> {
        self.check_compatible(other)?;

        self.arrays
            .iter_mut()
            .zip(&other.arrays)
            .try_for_each(|(dst, src)| dst.extend_from(src))
    }

    /// Check, without modifying anything, that [`extend_from`](Self::extend_from)
    /// would accept `other`
    pub fn check_compatible(&self, other: &Self) -> Result<(), DecomposeError> {
        if self.arrays.len() != other.arrays.len() {
            let names = |table: &Self| {
                table
                    .arrays
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            return Err(AttributeKindMismatch::new(
                "<table>".to_string(),
                format!("[{}]", names(self)),
                format!("[{}]", names(other)),
            )
            .into());
        }

        self.arrays
            .iter()
            .zip(&other.arrays)
            .try_for_each(|(dst, src)| dst.check_compatible(src))
    }

    /// Broadcast the tuple at `id` so that every array grows by `count` copies of it
    pub(crate) fn push_repeated(&mut self, source: &Self, id: usize, count: usize) -> Result<(), DecomposeError> {
        if let Some(array) = source.arrays.first() {
            check_ids(&[id], array.num_tuples())?;
        }
        let rows = source.gather(&vec![id; count])?;
        self.extend_from(&rows)
    }
}

impl<'a> IntoIterator for &'a AttributeTable {
    type Item = &'a AttributeArray;
    type IntoIter = std::slice::Iter<'a, AttributeArray>;

    fn into_iter(self) -> Self::IntoIter {
        self.arrays.iter()
    }
}

impl FromIterator<AttributeArray> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = AttributeArray>>(iter: I) -> Self {
        let mut table = Self::new();
        iter.into_iter().for_each(|array| {
            table.insert(array);
        });
        table
    }
}
