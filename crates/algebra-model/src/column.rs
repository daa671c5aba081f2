//! Column keys of the comparison table.
//!
//! The column set is closed: every displayed field of a
//! [`StructureRecord`](crate::StructureRecord) except `summary`, which is only
//! ever shown in the annotation panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A sortable, displayed column of the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Name,
    Type,
    Abelian,
    Finite,
    Ordered,
    ZeroDiv,
    Unique,
    Generators,
    Relations,
    Examples,
}

impl Column {
    /// All columns in record (display) order.
    pub const ALL: [Column; 10] = [
        Column::Name,
        Column::Type,
        Column::Abelian,
        Column::Finite,
        Column::Ordered,
        Column::ZeroDiv,
        Column::Unique,
        Column::Generators,
        Column::Relations,
        Column::Examples,
    ];

    /// Returns the record key as it appears in catalog files.
    pub const fn key(&self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Type => "type",
            Column::Abelian => "abelian",
            Column::Finite => "finite",
            Column::Ordered => "ordered",
            Column::ZeroDiv => "zeroDiv",
            Column::Unique => "unique",
            Column::Generators => "generators",
            Column::Relations => "relations",
            Column::Examples => "examples",
        }
    }

    /// Header text: the key with its first character upper-cased.
    pub const fn header_label(&self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Type => "Type",
            Column::Abelian => "Abelian",
            Column::Finite => "Finite",
            Column::Ordered => "Ordered",
            Column::ZeroDiv => "ZeroDiv",
            Column::Unique => "Unique",
            Column::Generators => "Generators",
            Column::Relations => "Relations",
            Column::Examples => "Examples",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Column {
    type Err = ModelError;

    /// Parse a column key (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Column::ALL
            .into_iter()
            .find(|column| column.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownColumn(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("zeroDiv".parse::<Column>(), Ok(Column::ZeroDiv));
        assert_eq!("ZERODIV".parse::<Column>(), Ok(Column::ZeroDiv));
        assert_eq!(" type ".parse::<Column>(), Ok(Column::Type));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert_eq!(
            "order".parse::<Column>(),
            Err(ModelError::UnknownColumn("order".to_string()))
        );
    }

    #[test]
    fn header_label_capitalizes_key() {
        for column in Column::ALL {
            let key = column.key();
            let mut expected = key[..1].to_uppercase();
            expected.push_str(&key[1..]);
            assert_eq!(column.header_label(), expected);
        }
    }
}
