//! End-to-end interaction scenarios on the built-in catalog.

use algebra_catalog::{Catalog, type_definition};
use algebra_core::{Action, SectionKind, TableState};
use algebra_model::{Column, SortOrder, SortState, StructureKind, StructureRecord};

fn record(catalog: &Catalog, name: &str) -> StructureRecord {
    catalog.find(name).cloned().expect("record in catalog")
}

fn names(records: &[StructureRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn header_clicks_cycle_ascending_descending_then_reset() {
    let catalog = Catalog::builtin();

    let first = TableState::new().reduce(Action::HeaderClicked(Column::Name));
    assert_eq!(first.sort, Some(SortState::ascending(Column::Name)));

    let second = first.reduce(Action::HeaderClicked(Column::Name));
    assert_eq!(
        second.sort,
        Some(SortState {
            column: Column::Name,
            order: SortOrder::Descending,
        })
    );
    let first_sorted = first.sorted(&catalog);
    let ascending = names(&first_sorted).into_iter().rev().collect::<Vec<_>>();
    assert_eq!(names(&second.sorted(&catalog)), ascending);

    let third = second.reduce(Action::HeaderClicked(Column::Type));
    assert_eq!(third.sort, Some(SortState::ascending(Column::Type)));
}

#[test]
fn name_sort_is_lexicographic() {
    let catalog = Catalog::builtin();
    let state = TableState::new().reduce(Action::HeaderClicked(Column::Name));
    let sorted = state.sorted(&catalog);
    insta::assert_snapshot!(names(&sorted).join("\n"), @r"
    Free Group F(a,b)
    Integers (Z, +)
    Matrix Ring M_n(R)
    Polynomial Ring R[x]
    Quaternions H
    Rational Numbers (Q, +, ×)
    Symmetric Group S_3
    Z × Z
    ");
}

#[test]
fn sorting_never_touches_the_catalog() {
    let catalog = Catalog::builtin();
    let before = catalog.clone();
    let state = TableState::new().reduce_all([
        Action::HeaderClicked(Column::Generators),
        Action::HeaderClicked(Column::Generators),
    ]);
    let _ = state.sorted(&catalog);
    assert_eq!(catalog, before);
}

#[test]
fn hovering_a_name_cell_shows_only_its_summary() {
    let catalog = Catalog::builtin();
    let integers = record(&catalog, "Integers (Z, +)");
    let state = TableState::new().reduce(Action::CellEntered {
        column: Column::Name,
        record: integers,
    });

    let panel = state.annotations();
    assert!(panel.visible);
    assert_eq!(panel.sections.len(), 1);
    insta::assert_json_snapshot!(panel.sections, @r#"
    [
      {
        "kind": "Summary",
        "title": "Summary: Integers (Z, +)",
        "body": "Fundamental number system. Infinite, ordered, and abelian. Forms a ring under addition and multiplication. Crucial in number theory and algebra."
      }
    ]
    "#);

    let cleared = state.reduce(Action::CellLeft(Column::Name));
    assert!(!cleared.annotations().visible);
}

#[test]
fn hovering_a_type_cell_defines_its_first_type() {
    let catalog = Catalog::builtin();
    let state = TableState::new().reduce(Action::CellEntered {
        column: Column::Type,
        record: record(&catalog, "Integers (Z, +)"),
    });

    let panel = state.annotations();
    let section = panel
        .section(SectionKind::TypeDefinition)
        .expect("type section");
    assert_eq!(section.title, "Definition: Group, Ring");
    assert_eq!(
        section.body.as_deref(),
        Some(type_definition(StructureKind::Group))
    );
}

#[test]
fn hovering_the_name_header_shows_an_empty_panel() {
    let state = TableState::new().reduce(Action::HeaderEntered(Column::Name));
    let panel = state.annotations();
    assert!(panel.visible);
    assert!(panel.sections.is_empty());

    let state = state.reduce(Action::HeaderLeft);
    assert!(!state.annotations().visible);
}

#[test]
fn hovering_a_relation_cell_defines_the_relation() {
    let catalog = Catalog::builtin();
    let state = TableState::new().reduce(Action::CellEntered {
        column: Column::Relations,
        record: record(&catalog, "Quaternions H"),
    });
    insta::assert_json_snapshot!(state.annotations().sections, @r#"
    [
      {
        "kind": "RelationDefinition",
        "title": "Relation Definition: i^2 = j^2 = k^2 = ijk = -1",
        "body": "Fundamental relations defining the quaternion algebra."
      }
    ]
    "#);
}

#[test]
fn independent_flags_stack_in_fixed_order() {
    let catalog = Catalog::builtin();
    let quaternions = record(&catalog, "Quaternions H");
    let state = TableState::new().reduce_all([
        Action::CellEntered {
            column: Column::Relations,
            record: quaternions.clone(),
        },
        Action::HeaderEntered(Column::Finite),
        Action::CellEntered {
            column: Column::Type,
            record: quaternions.clone(),
        },
        Action::CellEntered {
            column: Column::Name,
            record: quaternions,
        },
    ]);

    let kinds: Vec<SectionKind> = state
        .annotations()
        .sections
        .iter()
        .map(|section| section.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Summary,
            SectionKind::TypeDefinition,
            SectionKind::ColumnDefinition,
            SectionKind::RelationDefinition,
        ]
    );
}

#[test]
fn hovering_plain_cells_changes_nothing() {
    let catalog = Catalog::builtin();
    let state = TableState::new().reduce(Action::CellEntered {
        column: Column::Examples,
        record: record(&catalog, "Z × Z"),
    });
    assert_eq!(state, TableState::new());
}

#[test]
fn state_serializes_with_catalog_keys() {
    let state = TableState::new().reduce_all([
        Action::HeaderClicked(Column::ZeroDiv),
        Action::HeaderClicked(Column::ZeroDiv),
        Action::HeaderEntered(Column::Finite),
    ]);

    let json = serde_json::to_value(&state).expect("serialize state");

    assert_eq!(
        json["sort"],
        serde_json::json!({ "column": "zeroDiv", "order": "desc" })
    );
    assert_eq!(json["hover"]["column"], "finite");
    assert!(json["hover"]["structure"].is_null());
}

#[test]
fn entering_an_empty_type_cell_leaves_the_panel_hidden() {
    let mut product = record(&Catalog::builtin(), "Z × Z");
    product.kind = String::new();
    let state = TableState::new().reduce(Action::CellEntered {
        column: Column::Type,
        record: product,
    });
    assert!(state.hover.is_empty());
    assert!(!state.annotations().visible);
}
