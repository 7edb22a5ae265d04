//! container types for point and cell attribute data
//!
//! Attribute data comes in two flavours. Numeric arrays ([`NumericArray`]) can be
//! averaged, so the tuple of a new barycenter point is the mean of the tuples it was
//! built from. Text ([`TextArray`]) and bit ([`BitArray`]) arrays cannot, and new
//! tuples are filled with an empty string or a cleared bit instead.
//!
//! Arrays are gathered, by name, into an [`AttributeTable`]: one table for the points
//! of a mesh and one for its cells.

mod attribute;
mod bit;
mod numeric;
mod table;
mod text;

pub use attribute::{ArrayData, ArrayKind, AttributeArray, NumericData, NumericStorage, OpaqueData};
pub use bit::BitArray;
pub use numeric::NumericArray;
pub use table::AttributeTable;
pub use text::TextArray;
