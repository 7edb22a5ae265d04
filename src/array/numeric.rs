use crate::prelude::*;
use crate::traits::{check_ids, check_mean_ids};

#[derive(Deref, DerefMut, Into, Clone, PartialEq, Debug)]
/// Array container for numeric attribute data such as temperature or velocity
///
/// The first axis indexes tuples (one per point or cell), the second axis indexes
/// components. A scalar field has one component, a 3D vector field has three.
///
/// ## Example
///
/// For a velocity field over `100` points the array shape should be `(100, 3)`
pub struct NumericArray<NUM>(Array2<NUM>);

impl<NUM> NumericArray<NUM>
where
    NUM: Numeric,
{
    /// Construct a `NumericArray` from an array of shape `(tuples, components)`.
    pub fn new(arr: Array2<NUM>) -> Self {
        Self(arr)
    }

    /// An array with no tuples and `components` values per tuple
    pub fn empty(components: usize) -> Self {
        Self(Array2::from_elem((0, components), NUM::zero()))
    }

    /// Build a single component array from a list of values, one tuple per value
    pub fn from_scalars(values: Vec<NUM>) -> Self {
        Self(Array1::from(values).insert_axis(Axis(1)))
    }

    /// Build an array from fixed size tuples
    pub fn from_tuples<const N: usize>(tuples: &[[NUM; N]]) -> Self {
        Self(Array2::from_shape_fn((tuples.len(), N), |(i, j)| tuples[i][j]))
    }

    /// get the array that this type wraps.
    /// usually this method is not required because `NumericArray` implements [`DerefMut`](std::ops::DerefMut) and
    /// [`Deref`](std::ops::Deref)
    pub fn inner(self) -> Array2<NUM> {
        self.0
    }

    /// one tuple of the array, if it exists
    pub fn tuple(&self, id: usize) -> Option<ArrayView1<'_, NUM>> {
        (id < self.0.nrows()).then(|| self.0.row(id))
    }

    pub fn precision(&self) -> Precision {
        NUM::as_precision()
    }
}

impl<NUM> Interpolate for NumericArray<NUM>
where
    NUM: Numeric,
{
    fn num_tuples(&self) -> usize {
        self.0.nrows()
    }

    fn num_components(&self) -> usize {
        self.0.ncols()
    }

    fn push_interpolated(&mut self, ids: &[usize]) -> Result<(), DecomposeError> {
        check_mean_ids(ids, self.num_tuples())?;

        let mut sums = vec![0.0_f64; self.num_components()];

        for id in ids {
            sums.iter_mut()
                .zip(self.0.row(*id))
                .for_each(|(sum, value)| *sum += value.as_f64());
        }

        // divide the sum instead of summing pre-scaled weights so that means of
        // exactly representable values stay exact
        let count = ids.len() as f64;
        let mean: Array1<NUM> = sums
            .into_iter()
            .map(|sum| NUM::from_mean(sum / count))
            .collect();

        self.0.push_row(mean.view())?;

        Ok(())
    }

    fn gather(&self, ids: &[usize]) -> Result<Self, DecomposeError> {
        check_ids(ids, self.num_tuples())?;
        if ids.is_empty() {
            return Ok(self.empty_like());
        }
        Ok(Self(self.0.select(Axis(0), ids)))
    }

    fn extend_from(&mut self, other: &Self) -> Result<(), DecomposeError> {
        self.0.append(Axis(0), other.0.view())?;
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::empty(self.num_components())
    }
}
