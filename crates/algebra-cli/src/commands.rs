use anyhow::{Context, Result, bail};
use tracing::{debug, info, warn};

use algebra_catalog::{Catalog, lookup_relation, lookup_type};
use algebra_cli::render::{columns_table, comparison_table, panel_text};
use algebra_core::{Action, HoverTarget, TableState};
use algebra_model::{Column, SortState};

use crate::cli::{AnnotateArgs, TableArgs, TableFormatArg};

pub fn run_table(catalog: &Catalog, args: &TableArgs) -> Result<()> {
    let sort = args.sort.map(|column| SortState {
        column,
        order: args.order.into(),
    });
    debug!(?sort, "sort selection");
    let state = TableState::with_sort(sort);
    let records = state.sorted(catalog);
    match args.format {
        TableFormatArg::Table => {
            println!("Algebraic Structures Comparison");
            println!("{}", comparison_table(&state, &records));
        }
        TableFormatArg::Json => {
            let json = serde_json::to_string_pretty(&records).context("serialize records")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_columns() -> Result<()> {
    println!("{}", columns_table());
    Ok(())
}

pub fn run_annotate(catalog: &Catalog, args: &AnnotateArgs) -> Result<()> {
    let state = annotation_state(catalog, args)?;
    let panel = state.annotations();
    info!(sections = panel.sections.len(), "resolved annotation panel");
    match panel_text(&panel) {
        Some(text) => print!("{text}"),
        None => eprintln!("nothing to annotate: pass --structure, --type, --column or --relation"),
    }
    Ok(())
}

/// Table state after hovering everything `args` names.
///
/// The structure and column go through the reducer as name-cell and header
/// enter events. Type and relation labels are free text with no backing row,
/// so they set their flags directly. Empty labels set nothing.
fn annotation_state(catalog: &Catalog, args: &AnnotateArgs) -> Result<TableState> {
    let mut actions = Vec::new();
    if let Some(name) = &args.structure {
        let Some(record) = catalog.find(name) else {
            bail!("unknown structure: {name}");
        };
        actions.push(Action::CellEntered {
            column: Column::Name,
            record: record.clone(),
        });
    }
    if let Some(column) = args.column {
        actions.push(Action::HeaderEntered(column));
    }
    let mut state = TableState::new().reduce_all(actions);

    if let Some(label) = args.type_label.as_ref().filter(|label| !label.is_empty()) {
        if lookup_type(label).is_none() {
            warn!(type_label = %label, "type has no definition");
        }
        state.hover = state.hover.with(HoverTarget::Type(label.clone()));
    }
    if let Some(label) = args.relation.as_ref().filter(|label| !label.is_empty()) {
        if lookup_relation(label).is_none() {
            warn!(relation = %label, "relation has no definition");
        }
        state.hover = state.hover.with(HoverTarget::Relation(label.clone()));
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use algebra_core::SectionKind;
    use clap::Parser;

    fn annotate_args(flags: &[&str]) -> AnnotateArgs {
        let argv = ["algebra-table", "annotate"]
            .into_iter()
            .chain(flags.iter().copied());
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Annotate(args) => args,
            _ => panic!("expected the annotate subcommand"),
        }
    }

    #[test]
    fn unknown_structure_is_an_error() {
        let args = annotate_args(&["--structure", "Nope"]);
        let error = run_annotate(&Catalog::builtin(), &args).unwrap_err();
        assert_eq!(error.to_string(), "unknown structure: Nope");
    }

    #[test]
    fn structure_and_column_resolve_through_the_reducer() {
        let args = annotate_args(&["--structure", "Integers (Z, +)", "--column", "finite"]);
        let state = annotation_state(&Catalog::builtin(), &args).unwrap();

        assert_eq!(state.hover.column, Some(Column::Finite));
        let panel = state.annotations();
        let kinds: Vec<_> = panel.sections.iter().map(|section| section.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Summary, SectionKind::ColumnDefinition]);
        assert_eq!(panel.sections[0].title, "Summary: Integers (Z, +)");
        assert_eq!(panel.sections[1].title, "Column Definition: finite");
    }

    #[test]
    fn no_flags_leave_the_panel_hidden() {
        let args = annotate_args(&[]);
        let state = annotation_state(&Catalog::builtin(), &args).unwrap();
        assert!(!state.annotations().visible);
        assert!(run_annotate(&Catalog::builtin(), &args).is_ok());
    }

    #[test]
    fn type_miss_keeps_a_blank_section() {
        let args = annotate_args(&["--type", "Monoid", "--relation", ""]);
        let panel = annotation_state(&Catalog::builtin(), &args)
            .unwrap()
            .annotations();
        assert_eq!(panel.sections.len(), 1);
        assert_eq!(panel.sections[0].title, "Definition: Monoid");
        assert_eq!(panel.sections[0].body, None);
    }
}
