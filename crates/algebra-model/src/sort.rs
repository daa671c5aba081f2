//! Sort direction and sort state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::column::Column;
use crate::error::ModelError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub const fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Arrow appended to the sorted column's header.
    pub const fn indicator(self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ModelError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// The column the table is sorted by, and in which direction.
///
/// The table starts without a sort state (source order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub column: Column,
    pub order: SortOrder,
}

impl SortState {
    pub const fn ascending(column: Column) -> Self {
        Self {
            column,
            order: SortOrder::Ascending,
        }
    }

    /// State after the header of `column` is clicked.
    ///
    /// Clicking the sorted column flips the direction; clicking any other
    /// column sorts it ascending.
    pub fn after_click(current: Option<SortState>, column: Column) -> SortState {
        match current {
            Some(state) if state.column == column => SortState {
                column,
                order: state.order.toggled(),
            },
            _ => SortState::ascending(column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_sorts_ascending() {
        let state = SortState::after_click(None, Column::Finite);
        assert_eq!(state, SortState::ascending(Column::Finite));
    }

    #[test]
    fn repeated_click_toggles_direction() {
        let first = SortState::after_click(None, Column::Name);
        let second = SortState::after_click(Some(first), Column::Name);
        let third = SortState::after_click(Some(second), Column::Name);
        assert_eq!(second.order, SortOrder::Descending);
        assert_eq!(third.order, SortOrder::Ascending);
    }

    #[test]
    fn other_column_resets_to_ascending() {
        let descending = SortState {
            column: Column::Name,
            order: SortOrder::Descending,
        };
        let state = SortState::after_click(Some(descending), Column::Generators);
        assert_eq!(state, SortState::ascending(Column::Generators));
    }

    #[test]
    fn parses_order_names() {
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!("ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert!("up".parse::<SortOrder>().is_err());
    }
}
