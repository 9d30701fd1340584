//! Group-table validator.
//!
//! Operates on the live notation table (no file I/O):
//! - cycle → one-line → cycle round-trips for all 24 elements
//! - every explicit action is a bijection, on `1..4` and on `a, b, c`
//! - the six cosets partition S4 and each shares one image
//! - the kernel is exactly the Klein four-group
//! - the quotient map respects composition

use std::collections::BTreeSet;

use quotient_group::action::explicit_action;
use quotient_group::alphabet::{Alphabet, DIGITS, LETTERS};
use quotient_group::notation::parse_cycles;
use quotient_group::quotient::quotient_image;
use quotient_group::{Notation, NotationTable, S4};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "group/tables";

/// The Klein four-group in canonical cycle notation.
const KLEIN_FOUR: [&str; 4] = ["() = id", "(12)(34)", "(13)(24)", "(14)(23)"];

/// Validates the notation table and the quotient map.
pub fn validate() -> ConformanceReport {
    let table = NotationTable::full();
    let mut report = ConformanceReport::new();
    report.push(check_round_trip(table));
    report.push(check_actions(table));
    report.push(check_cosets(table));
    report.push(check_kernel(table));
    report.push(check_homomorphism());
    report
}

fn check_round_trip(table: &NotationTable) -> TestResult {
    let mut issues = Vec::new();
    let mut count = 0usize;
    for cycle in table.elements(Notation::Cycle) {
        count += 1;
        match table.cycle_to_one_line(cycle) {
            Some(one_line) => {
                if table.one_line_to_cycle(one_line) != Some(cycle) {
                    issues.push(format!("{cycle} → {one_line} does not convert back"));
                }
            }
            None => issues.push(format!("{cycle}: no one-line form")),
        }
        match parse_cycles(cycle, &DIGITS) {
            Ok(sigma) if sigma.cycle_notation(&DIGITS) == cycle => {}
            Ok(sigma) => issues.push(format!(
                "{cycle} is not canonical (expected {})",
                sigma.cycle_notation(&DIGITS)
            )),
            Err(e) => issues.push(format!("{cycle}: {e}")),
        }
    }
    if count != 24 {
        issues.push(format!("expected 24 elements, found {count}"));
    }
    TestResult::from_issues(
        VALIDATOR,
        "All 24 elements round-trip between cycle and one-line notation",
        "Notation round-trip failures",
        issues,
    )
}

fn check_actions(table: &NotationTable) -> TestResult {
    let mut issues = Vec::new();
    for entry in table.entries() {
        if !is_bijection(&explicit_action(&entry.cycle, &DIGITS), &DIGITS) {
            issues.push(format!("{}: action on 1..4 is not a bijection", entry.cycle));
        }
        if !is_bijection(&explicit_action(&entry.image_cycle, &LETTERS), &LETTERS) {
            issues.push(format!(
                "{} ↦ {}: action on a, b, c is not a bijection",
                entry.cycle, entry.image_cycle
            ));
        }
        let derived: String = explicit_action(&entry.cycle, &DIGITS)
            .iter()
            .map(|&(_, to)| to)
            .collect();
        if derived != entry.one_line {
            issues.push(format!(
                "{}: explicit action gives {derived}, table says {}",
                entry.cycle, entry.one_line
            ));
        }
    }
    TestResult::from_issues(
        VALIDATOR,
        "Every explicit action is a bijection matching the one-line form",
        "Explicit action failures",
        issues,
    )
}

fn is_bijection<const N: usize>(action: &[(char, char); N], alphabet: &Alphabet<N>) -> bool {
    let images: BTreeSet<char> = action.iter().map(|&(_, to)| to).collect();
    let labels: BTreeSet<char> = alphabet.symbols().iter().copied().collect();
    images == labels
}

fn check_cosets(table: &NotationTable) -> TestResult {
    let mut issues = Vec::new();
    let cosets = table.cosets();
    if cosets.len() != 6 {
        issues.push(format!("expected 6 cosets, found {}", cosets.len()));
    }

    let mut seen: BTreeSet<S4> = BTreeSet::new();
    for (i, coset) in cosets.iter().enumerate() {
        if coset.members.len() != 4 {
            issues.push(format!("coset {} has {} members", i + 1, coset.members.len()));
        }
        for member in &coset.members {
            if quotient_image(member) != coset.image {
                issues.push(format!(
                    "coset {}: {} does not map to {}",
                    i + 1,
                    member.cycle_notation(&DIGITS),
                    coset.image.cycle_notation(&LETTERS)
                ));
            }
            if !seen.insert(*member) {
                issues.push(format!(
                    "{} appears in more than one coset",
                    member.cycle_notation(&DIGITS)
                ));
            }
        }
    }
    if seen.len() != 24 {
        issues.push(format!("cosets cover {} of 24 elements", seen.len()));
    }

    TestResult::from_issues(
        VALIDATOR,
        "The 6 cosets of K4 partition S4, each with a single image",
        "Coset partition failures",
        issues,
    )
}

fn check_kernel(table: &NotationTable) -> TestResult {
    let kernel: Vec<String> = table
        .kernel()
        .members
        .iter()
        .map(|m| m.cycle_notation(&DIGITS))
        .collect();
    if kernel == KLEIN_FOUR {
        TestResult::pass(VALIDATOR, "Kernel is the Klein four-group")
    } else {
        TestResult::fail(VALIDATOR, "Kernel is not the Klein four-group").with_details(kernel)
    }
}

fn check_homomorphism() -> TestResult {
    let elements = S4::all();
    let mut issues = Vec::new();
    for sigma in &elements {
        for tau in &elements {
            let lhs = quotient_image(&sigma.compose(tau));
            let rhs = quotient_image(sigma).compose(&quotient_image(tau));
            if lhs != rhs {
                issues.push(format!(
                    "φ({}∘{}) = {} but φ({})φ({}) = {}",
                    sigma.cycle_notation(&DIGITS),
                    tau.cycle_notation(&DIGITS),
                    lhs.cycle_notation(&LETTERS),
                    sigma.cycle_notation(&DIGITS),
                    tau.cycle_notation(&DIGITS),
                    rhs.cycle_notation(&LETTERS)
                ));
            }
        }
    }
    TestResult::from_issues(
        VALIDATOR,
        "Quotient map respects composition (576 pairs)",
        "Quotient map is not a homomorphism",
        issues,
    )
}
