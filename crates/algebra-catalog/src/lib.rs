#![deny(unsafe_code)]

mod builtin;
pub mod definitions;
pub mod error;
pub mod loader;

pub use crate::definitions::{
    column_definition, lookup_relation, lookup_type, relation_definition, type_definition,
};
pub use crate::error::CatalogError;
pub use crate::loader::Catalog;
