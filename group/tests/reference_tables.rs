//! Checks the derived notation table against the hand-written tables the
//! visualiser page originally shipped with.

use std::collections::BTreeSet;

use quotient_group::{Notation, NotationTable};

/// (cycle, one-line, S3 image in cycle notation, S3 image in one-line notation)
const REFERENCE: [(&str, &str, &str, &str); 24] = [
    ("() = id", "1234", "() = id", "abc"),
    ("(12)", "2134", "(ab)", "bac"),
    ("(13)", "3214", "(ac)", "cba"),
    ("(14)", "4231", "(bc)", "acb"),
    ("(23)", "1324", "(bc)", "acb"),
    ("(24)", "1432", "(ac)", "cba"),
    ("(34)", "1243", "(ab)", "bac"),
    ("(123)", "2314", "(abc)", "bca"),
    ("(124)", "2431", "(acb)", "cab"),
    ("(132)", "3124", "(acb)", "cab"),
    ("(134)", "3241", "(abc)", "bca"),
    ("(142)", "4132", "(abc)", "bca"),
    ("(143)", "4213", "(acb)", "cab"),
    ("(234)", "1342", "(acb)", "cab"),
    ("(243)", "1423", "(abc)", "bca"),
    ("(12)(34)", "2143", "() = id", "abc"),
    ("(13)(24)", "3412", "() = id", "abc"),
    ("(14)(23)", "4321", "() = id", "abc"),
    ("(1234)", "2341", "(ac)", "cba"),
    ("(1243)", "2413", "(bc)", "acb"),
    ("(1324)", "3421", "(ab)", "bac"),
    ("(1342)", "3142", "(bc)", "acb"),
    ("(1423)", "4312", "(ab)", "bac"),
    ("(1432)", "4123", "(ac)", "cba"),
];

const REFERENCE_COSETS: [[&str; 4]; 6] = [
    ["() = id", "(12)(34)", "(13)(24)", "(14)(23)"],
    ["(12)", "(34)", "(1324)", "(1423)"],
    ["(13)", "(1234)", "(24)", "(1432)"],
    ["(23)", "(1342)", "(1243)", "(14)"],
    ["(123)", "(134)", "(243)", "(142)"],
    ["(132)", "(234)", "(124)", "(143)"],
];

#[test]
fn rows_match_in_display_order() {
    let table = NotationTable::full();
    for (entry, &(cycle, one_line, image_cycle, image_one_line)) in
        table.entries().iter().zip(REFERENCE.iter())
    {
        assert_eq!(entry.cycle, cycle);
        assert_eq!(entry.one_line, one_line, "{cycle}");
        assert_eq!(entry.image_cycle, image_cycle, "{cycle}");
        assert_eq!(entry.image_one_line, image_one_line, "{cycle}");
    }
}

#[test]
fn conversions_match_both_ways() {
    let table = NotationTable::full();
    for &(cycle, one_line, image_cycle, image_one_line) in &REFERENCE {
        assert_eq!(table.cycle_to_one_line(cycle), Some(one_line));
        assert_eq!(table.one_line_to_cycle(one_line), Some(cycle));
        assert_eq!(table.image(Notation::Cycle, cycle), Some(image_cycle));
        assert_eq!(table.image(Notation::OneLine, one_line), Some(image_one_line));
    }
}

#[test]
fn cosets_match_as_sets() {
    let table = NotationTable::full();
    for (coset, reference) in table.cosets().iter().zip(REFERENCE_COSETS.iter()) {
        let derived: BTreeSet<String> = coset
            .members
            .iter()
            .filter_map(|m| table.entry(m))
            .map(|e| e.cycle.clone())
            .collect();
        let expected: BTreeSet<String> = reference.iter().map(|s| s.to_string()).collect();
        assert_eq!(derived, expected);
    }
}

#[test]
fn cosets_partition_the_group() {
    let table = NotationTable::full();
    let mut seen = BTreeSet::new();
    for coset in table.cosets() {
        assert_eq!(coset.members.len(), 4);
        let images: BTreeSet<_> = coset
            .members
            .iter()
            .filter_map(|m| table.entry(m))
            .map(|e| e.image)
            .collect();
        assert_eq!(images.len(), 1, "coset members disagree on their image");
        for member in &coset.members {
            assert!(seen.insert(*member), "element in two cosets");
        }
    }
    assert_eq!(seen.len(), 24);
}
