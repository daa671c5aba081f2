//! The built-in comparison dataset.

use algebra_model::StructureRecord;

struct RawStructure {
    name: &'static str,
    kind: &'static str,
    abelian: &'static str,
    finite: &'static str,
    ordered: &'static str,
    zero_div: &'static str,
    unique: &'static str,
    generators: &'static str,
    relations: &'static str,
    examples: &'static str,
    summary: &'static str,
}

impl RawStructure {
    fn to_record(&self) -> StructureRecord {
        StructureRecord {
            name: self.name.to_string(),
            kind: self.kind.to_string(),
            abelian: self.abelian.to_string(),
            finite: self.finite.to_string(),
            ordered: self.ordered.to_string(),
            zero_div: self.zero_div.to_string(),
            unique: self.unique.to_string(),
            generators: self.generators.to_string(),
            relations: self.relations.to_string(),
            examples: self.examples.to_string(),
            summary: self.summary.to_string(),
        }
    }
}

const STRUCTURES: [RawStructure; 8] = [
    RawStructure {
        name: "Free Group F(a,b)",
        kind: "Group",
        abelian: "No",
        finite: "No",
        ordered: "No",
        zero_div: "N/A",
        unique: "Yes",
        generators: "2",
        relations: "None",
        examples: "Words in a, b, a^(-1), b^(-1)",
        summary: "The 'freest' group with two generators. Has no relations other than group axioms. Infinite and non-abelian. Essential in abstract algebra and theoretical physics.",
    },
    RawStructure {
        name: "Integers (Z, +)",
        kind: "Group, Ring",
        abelian: "Yes",
        finite: "No",
        ordered: "Yes",
        zero_div: "No",
        unique: "Yes",
        generators: "1",
        relations: "Commutativity",
        examples: "..., -1, 0, 1, 2, ...",
        summary: "Fundamental number system. Infinite, ordered, and abelian. Forms a ring under addition and multiplication. Crucial in number theory and algebra.",
    },
    RawStructure {
        name: "Rational Numbers (Q, +, ×)",
        kind: "Field",
        abelian: "Yes",
        finite: "No",
        ordered: "Yes",
        zero_div: "No",
        unique: "No",
        generators: "∞",
        relations: "Field axioms",
        examples: "1/2, -3/4, 2, ...",
        summary: "Smallest ordered field containing integers. Dense in real numbers. Essential in analysis and algebra. Allows division by non-zero elements.",
    },
    RawStructure {
        name: "Symmetric Group S_3",
        kind: "Group",
        abelian: "No",
        finite: "Yes",
        ordered: "No",
        zero_div: "N/A",
        unique: "No",
        generators: "2",
        relations: "Several",
        examples: "(1 2), (1 2 3)",
        summary: "Smallest non-abelian group. Contains all permutations of 3 objects. Important in group theory and combinatorics. Illustrates concepts of symmetry.",
    },
    RawStructure {
        name: "Polynomial Ring R[x]",
        kind: "Ring",
        abelian: "Yes",
        finite: "No",
        ordered: "No",
        zero_div: "Yes",
        unique: "Yes",
        generators: "∞",
        relations: "Commutativity",
        examples: "x^2 + 2x + 1",
        summary: "Ring of polynomials with real coefficients. Infinite-dimensional vector space. Fundamental in algebra and analysis. Used in polynomial interpolation and algebraic geometry.",
    },
    RawStructure {
        name: "Quaternions H",
        kind: "Division Ring",
        abelian: "No",
        finite: "No",
        ordered: "No",
        zero_div: "No",
        unique: "Yes",
        generators: "4",
        relations: "i^2 = j^2 = k^2 = ijk = -1",
        examples: "1 + 2i - j + 3k",
        summary: "4D extension of complex numbers. Non-commutative division ring. Used in 3D rotations, computer graphics, and quantum mechanics. Discovered by Hamilton.",
    },
    RawStructure {
        name: "Z × Z",
        kind: "Abelian Group",
        abelian: "Yes",
        finite: "No",
        ordered: "Partially",
        zero_div: "N/A",
        unique: "Yes",
        generators: "2",
        relations: "Commutativity",
        examples: "(3, -2), (0, 1)",
        summary: "Direct product of integers with itself. Forms a lattice in 2D plane. Important in algebraic topology and number theory. Generalizes to n-dimensional integer lattices.",
    },
    RawStructure {
        name: "Matrix Ring M_n(R)",
        kind: "Ring",
        abelian: "No (n>1)",
        finite: "No",
        ordered: "No",
        zero_div: "Yes (n>1)",
        unique: "Yes",
        generators: "n^2",
        relations: "Matrix multiplication",
        examples: "[[1,2],[3,4]]",
        summary: "Ring of n×n matrices over real numbers. Non-commutative for n>1. Essential in linear algebra, group representation theory, and differential equations.",
    },
];

pub(crate) fn builtin_structures() -> Vec<StructureRecord> {
    STRUCTURES.iter().map(RawStructure::to_record).collect()
}
