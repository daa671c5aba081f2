//! Definition maps for hover annotations.
//!
//! Three independent maps: structure type, column key and relation label.
//! Each is an exhaustive match over its key set, so a missing definition is an
//! explicit `None` rather than an absent map entry.

use algebra_model::{Column, RelationKind, StructureKind};

/// Definition of a structure type.
pub const fn type_definition(kind: StructureKind) -> &'static str {
    match kind {
        StructureKind::Group => {
            "A set with an associative binary operation, identity element, and inverses for all elements. Example: The integers under addition."
        }
        StructureKind::Ring => {
            "A set with two binary operations (usually called addition and multiplication) satisfying certain axioms. Example: The integers under addition and multiplication."
        }
        StructureKind::Field => {
            "A ring where all non-zero elements have multiplicative inverses. Example: The rational numbers under addition and multiplication."
        }
        StructureKind::DivisionRing => {
            "A ring where all non-zero elements have multiplicative inverses, but multiplication may not be commutative. Example: The quaternions."
        }
        StructureKind::AbelianGroup => {
            "A group where the binary operation is commutative. Example: The integers under addition."
        }
    }
}

/// Definition of a column, if it has one.
///
/// `name`, `type` and `examples` are self-explanatory and carry no definition.
pub const fn column_definition(column: Column) -> Option<&'static str> {
    match column {
        Column::Name | Column::Type | Column::Examples => None,
        Column::Abelian => Some(
            "A structure is abelian if its operation(s) are commutative, i.e., a * b = b * a for all elements a and b.",
        ),
        Column::Finite => {
            Some("A structure is finite if it contains a finite number of elements.")
        }
        Column::Ordered => Some(
            "A structure is ordered if there's a consistent way to say one element is 'less than' another.",
        ),
        Column::ZeroDiv => Some(
            "Zero divisors are non-zero elements that, when multiplied by another non-zero element, result in zero.",
        ),
        Column::Unique => {
            Some("Refers to whether elements have a unique representation in the structure.")
        }
        Column::Generators => Some(
            "A set of elements that can produce all other elements in the structure through the structure's operations.",
        ),
        Column::Relations => Some(
            "Equations that hold between elements of the structure, often defining the structure's properties.",
        ),
    }
}

/// Definition of a defining relation.
pub const fn relation_definition(kind: RelationKind) -> &'static str {
    match kind {
        RelationKind::None => "No additional relations beyond the basic axioms of the structure.",
        RelationKind::Commutativity => "For all elements a and b, a * b = b * a.",
        RelationKind::FieldAxioms => {
            "Includes commutativity, associativity, distributivity, and existence of additive and multiplicative inverses (except for 0)."
        }
        RelationKind::Several => "Multiple relations defining the structure's specific properties.",
        RelationKind::QuaternionUnits => "Fundamental relations defining the quaternion algebra.",
        RelationKind::MatrixMultiplication => {
            "Rules for multiplying matrices, including non-commutativity for matrices larger than 1x1."
        }
    }
}

/// Look up the definition for a type cell such as `"Group, Ring"`.
///
/// Only the first comma-separated segment is used.
pub fn lookup_type(type_label: &str) -> Option<&'static str> {
    StructureKind::primary(type_label).map(type_definition)
}

/// Look up the definition for a relation cell (exact match).
pub fn lookup_relation(relation: &str) -> Option<&'static str> {
    RelationKind::from_label(relation).map(relation_definition)
}
