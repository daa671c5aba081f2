//! Hover state.
//!
//! Four independent flags, one per annotation source. They are not mutually
//! exclusive: a header and a cell can both be marked hovered in the same
//! frame, and each then contributes its own panel section.

use algebra_model::{Column, StructureRecord};
use serde::Serialize;

/// Which of the four hover flags an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HoverKind {
    /// Name cell of a row.
    Structure,
    /// Type cell of a row.
    Type,
    /// Column header.
    Column,
    /// Relations cell of a row.
    Relation,
}

impl HoverKind {
    pub const ALL: [HoverKind; 4] = [
        HoverKind::Structure,
        HoverKind::Type,
        HoverKind::Column,
        HoverKind::Relation,
    ];

    /// Hover flag driven by cells of `column`, if any.
    ///
    /// Only the name, type and relations cells carry annotations.
    pub const fn for_cell(column: Column) -> Option<HoverKind> {
        match column {
            Column::Name => Some(HoverKind::Structure),
            Column::Type => Some(HoverKind::Type),
            Column::Relations => Some(HoverKind::Relation),
            Column::Abelian
            | Column::Finite
            | Column::Ordered
            | Column::ZeroDiv
            | Column::Unique
            | Column::Generators
            | Column::Examples => None,
        }
    }
}

/// Value carried by an active hover flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HoverTarget {
    Structure(StructureRecord),
    Type(String),
    Column(Column),
    Relation(String),
}

impl HoverTarget {
    pub const fn kind(&self) -> HoverKind {
        match self {
            HoverTarget::Structure(_) => HoverKind::Structure,
            HoverTarget::Type(_) => HoverKind::Type,
            HoverTarget::Column(_) => HoverKind::Column,
            HoverTarget::Relation(_) => HoverKind::Relation,
        }
    }

    /// Target produced by hovering the `column` cell of `record`.
    ///
    /// Only name, type and relations cells carry a target, and an empty type
    /// or relations value carries none.
    pub fn for_cell(column: Column, record: &StructureRecord) -> Option<HoverTarget> {
        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());
        match column {
            Column::Name => Some(HoverTarget::Structure(record.clone())),
            Column::Type => non_empty(&record.kind).map(HoverTarget::Type),
            Column::Relations => non_empty(&record.relations).map(HoverTarget::Relation),
            Column::Abelian
            | Column::Finite
            | Column::Ordered
            | Column::ZeroDiv
            | Column::Unique
            | Column::Generators
            | Column::Examples => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HoverState {
    pub structure: Option<StructureRecord>,
    pub type_label: Option<String>,
    pub column: Option<Column>,
    pub relation: Option<String>,
}

impl HoverState {
    pub fn is_empty(&self) -> bool {
        self.structure.is_none()
            && self.type_label.is_none()
            && self.column.is_none()
            && self.relation.is_none()
    }

    pub fn is_set(&self, kind: HoverKind) -> bool {
        match kind {
            HoverKind::Structure => self.structure.is_some(),
            HoverKind::Type => self.type_label.is_some(),
            HoverKind::Column => self.column.is_some(),
            HoverKind::Relation => self.relation.is_some(),
        }
    }

    /// Current value of one flag.
    pub fn target(&self, kind: HoverKind) -> Option<HoverTarget> {
        match kind {
            HoverKind::Structure => self.structure.clone().map(HoverTarget::Structure),
            HoverKind::Type => self.type_label.clone().map(HoverTarget::Type),
            HoverKind::Column => self.column.map(HoverTarget::Column),
            HoverKind::Relation => self.relation.clone().map(HoverTarget::Relation),
        }
    }

    /// Copy of this state with the target's flag set.
    pub fn with(&self, target: HoverTarget) -> HoverState {
        let mut next = self.clone();
        match target {
            HoverTarget::Structure(record) => next.structure = Some(record),
            HoverTarget::Type(label) => next.type_label = Some(label),
            HoverTarget::Column(column) => next.column = Some(column),
            HoverTarget::Relation(label) => next.relation = Some(label),
        }
        next
    }

    /// Copy of this state with one flag cleared.
    pub fn without(&self, kind: HoverKind) -> HoverState {
        let mut next = self.clone();
        match kind {
            HoverKind::Structure => next.structure = None,
            HoverKind::Type => next.type_label = None,
            HoverKind::Column => next.column = None,
            HoverKind::Relation => next.relation = None,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_catalog::Catalog;

    #[test]
    fn only_annotated_cells_produce_targets() {
        let catalog = Catalog::builtin();
        let record = &catalog.structures()[1];
        assert_eq!(
            HoverTarget::for_cell(Column::Type, record),
            Some(HoverTarget::Type("Group, Ring".to_string()))
        );
        assert_eq!(
            HoverTarget::for_cell(Column::Relations, record),
            Some(HoverTarget::Relation("Commutativity".to_string()))
        );
        assert_eq!(HoverTarget::for_cell(Column::Generators, record), None);
        assert_eq!(HoverTarget::for_cell(Column::Examples, record), None);
    }

    #[test]
    fn empty_type_and_relation_cells_produce_no_target() {
        let catalog = Catalog::builtin();
        let mut record = catalog.structures()[1].clone();
        record.kind.clear();
        record.relations.clear();
        assert_eq!(HoverTarget::for_cell(Column::Type, &record), None);
        assert_eq!(HoverTarget::for_cell(Column::Relations, &record), None);
        assert!(matches!(
            HoverTarget::for_cell(Column::Name, &record),
            Some(HoverTarget::Structure(_))
        ));
    }

    #[test]
    fn flags_are_independent() {
        let state = HoverState::default()
            .with(HoverTarget::Column(Column::Finite))
            .with(HoverTarget::Type("Ring".to_string()));
        assert!(state.is_set(HoverKind::Column));
        assert!(state.is_set(HoverKind::Type));

        let state = state.without(HoverKind::Column);
        assert!(!state.is_set(HoverKind::Column));
        assert_eq!(state.type_label.as_deref(), Some("Ring"));
    }

    #[test]
    fn clearing_an_unset_flag_is_a_no_op() {
        let state = HoverState::default().without(HoverKind::Relation);
        assert!(state.is_empty());
    }
}
