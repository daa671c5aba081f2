pub mod column;
pub mod error;
pub mod kinds;
pub mod record;
pub mod sort;

pub use column::Column;
pub use error::{ModelError, Result};
pub use kinds::{RelationKind, StructureKind};
pub use record::StructureRecord;
pub use sort::{SortOrder, SortState};
