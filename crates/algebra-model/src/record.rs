//! The structure record: one row of the comparison table.

use serde::{Deserialize, Serialize};

use crate::column::Column;

/// One algebraic structure as listed in the comparison table.
///
/// All values are display text. Fields that look numeric (`generators`) or
/// boolean (`abelian`) are compared as plain strings when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecord {
    pub name: String,
    /// Structure type label, e.g. `"Group, Ring"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub abelian: String,
    pub finite: String,
    pub ordered: String,
    pub zero_div: String,
    pub unique: String,
    pub generators: String,
    pub relations: String,
    pub examples: String,
    /// Prose summary shown when the row's name cell is hovered.
    pub summary: String,
}

impl StructureRecord {
    /// Returns the display value for a column.
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Name => &self.name,
            Column::Type => &self.kind,
            Column::Abelian => &self.abelian,
            Column::Finite => &self.finite,
            Column::Ordered => &self.ordered,
            Column::ZeroDiv => &self.zero_div,
            Column::Unique => &self.unique,
            Column::Generators => &self.generators,
            Column::Relations => &self.relations,
            Column::Examples => &self.examples,
        }
    }

    /// Display values for every column, in column order.
    pub fn values(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL
            .into_iter()
            .map(move |column| (column, self.value(column)))
    }
}
