//! Annotation panel resolution.
//!
//! The panel is shown whenever any hover flag is set. Each set flag may add
//! one section, always in the order summary, type, column, relation.

use algebra_catalog::{column_definition, lookup_relation, lookup_type};
use serde::Serialize;

use crate::hover::HoverState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SectionKind {
    Summary,
    TypeDefinition,
    ColumnDefinition,
    RelationDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSection {
    pub kind: SectionKind,
    pub title: String,
    /// `None` when the hovered value has no definition.
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationPanel {
    pub visible: bool,
    pub sections: Vec<AnnotationSection>,
}

impl AnnotationPanel {
    pub fn resolve(hover: &HoverState) -> AnnotationPanel {
        let mut sections = Vec::new();

        if let Some(record) = &hover.structure {
            sections.push(AnnotationSection {
                kind: SectionKind::Summary,
                title: format!("Summary: {}", record.name),
                body: Some(record.summary.clone()),
            });
        }

        // A type without a definition still gets a section, with an empty body.
        if let Some(label) = &hover.type_label {
            sections.push(AnnotationSection {
                kind: SectionKind::TypeDefinition,
                title: format!("Definition: {label}"),
                body: lookup_type(label).map(str::to_string),
            });
        }

        if let Some(column) = hover.column
            && let Some(definition) = column_definition(column)
        {
            sections.push(AnnotationSection {
                kind: SectionKind::ColumnDefinition,
                title: format!("Column Definition: {}", column.key()),
                body: Some(definition.to_string()),
            });
        }

        if let Some(label) = &hover.relation
            && let Some(definition) = lookup_relation(label)
        {
            sections.push(AnnotationSection {
                kind: SectionKind::RelationDefinition,
                title: format!("Relation Definition: {label}"),
                body: Some(definition.to_string()),
            });
        }

        AnnotationPanel {
            visible: !hover.is_empty(),
            sections,
        }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&AnnotationSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algebra_model::Column;

    #[test]
    fn empty_hover_hides_the_panel() {
        let panel = AnnotationPanel::resolve(&HoverState::default());
        assert!(!panel.visible);
        assert!(panel.sections.is_empty());
    }

    #[test]
    fn unknown_type_keeps_a_blank_section() {
        let hover = HoverState {
            type_label: Some("Monoid".to_string()),
            ..HoverState::default()
        };
        let panel = AnnotationPanel::resolve(&hover);
        let section = panel.section(SectionKind::TypeDefinition).expect("type section");
        assert_eq!(section.title, "Definition: Monoid");
        assert_eq!(section.body, None);
    }

    #[test]
    fn undefined_column_shows_an_empty_panel() {
        let hover = HoverState {
            column: Some(Column::Examples),
            ..HoverState::default()
        };
        let panel = AnnotationPanel::resolve(&hover);
        assert!(panel.visible);
        assert!(panel.sections.is_empty());
    }

    #[test]
    fn unknown_relation_adds_no_section() {
        let hover = HoverState {
            relation: Some("Associativity".to_string()),
            ..HoverState::default()
        };
        let panel = AnnotationPanel::resolve(&hover);
        assert!(panel.visible);
        assert_eq!(panel.section(SectionKind::RelationDefinition), None);
    }
}
