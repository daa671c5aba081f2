//! Enumerated key sets for the type and relation definition maps.
//!
//! Type and relation cells hold free text. Only the labels listed here have a
//! definition; anything else resolves to `None`, which callers render as "no
//! annotation".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structure type with a known definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Group,
    Ring,
    Field,
    DivisionRing,
    AbelianGroup,
}

impl StructureKind {
    pub const ALL: [StructureKind; 5] = [
        StructureKind::Group,
        StructureKind::Ring,
        StructureKind::Field,
        StructureKind::DivisionRing,
        StructureKind::AbelianGroup,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            StructureKind::Group => "Group",
            StructureKind::Ring => "Ring",
            StructureKind::Field => "Field",
            StructureKind::DivisionRing => "Division Ring",
            StructureKind::AbelianGroup => "Abelian Group",
        }
    }

    /// Exact (case-sensitive) match on the label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Resolve the primary kind of a type cell such as `"Group, Ring"`.
    ///
    /// Only the first comma-separated segment is considered, trimmed.
    pub fn primary(type_label: &str) -> Option<Self> {
        let first = type_label.split(',').next().unwrap_or_default().trim();
        Self::from_label(first)
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Defining relation with a known definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    None,
    Commutativity,
    FieldAxioms,
    Several,
    QuaternionUnits,
    MatrixMultiplication,
}

impl RelationKind {
    pub const ALL: [RelationKind; 6] = [
        RelationKind::None,
        RelationKind::Commutativity,
        RelationKind::FieldAxioms,
        RelationKind::Several,
        RelationKind::QuaternionUnits,
        RelationKind::MatrixMultiplication,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            RelationKind::None => "None",
            RelationKind::Commutativity => "Commutativity",
            RelationKind::FieldAxioms => "Field axioms",
            RelationKind::Several => "Several",
            RelationKind::QuaternionUnits => "i^2 = j^2 = k^2 = ijk = -1",
            RelationKind::MatrixMultiplication => "Matrix multiplication",
        }
    }

    /// Exact match on the whole relation cell.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_kind_uses_first_segment() {
        assert_eq!(StructureKind::primary("Group, Ring"), Some(StructureKind::Group));
        assert_eq!(
            StructureKind::primary("  Division Ring "),
            Some(StructureKind::DivisionRing)
        );
    }

    #[test]
    fn unmapped_labels_resolve_to_none() {
        assert_eq!(StructureKind::primary("Monoid"), None);
        assert_eq!(StructureKind::primary(""), None);
        assert_eq!(StructureKind::from_label("group"), None);
        assert_eq!(RelationKind::from_label("commutativity"), None);
    }

    #[test]
    fn relation_matches_whole_cell() {
        assert_eq!(
            RelationKind::from_label("i^2 = j^2 = k^2 = ijk = -1"),
            Some(RelationKind::QuaternionUnits)
        );
        assert_eq!(RelationKind::from_label("Commutativity "), None);
    }
}
