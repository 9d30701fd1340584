//! The quotient map S4 → S4/K4 ≅ S3.
//!
//! There are exactly three ways to split the vertices `{1, 2, 3, 4}` into two
//! pairs, and every permutation of the vertices permutes those splittings.
//! Labelling them
//!
//! | letter | pairing |
//! |--------|---------|
//! | `a` | `{1,4} {2,3}` |
//! | `b` | `{1,3} {2,4}` |
//! | `c` | `{1,2} {3,4}` |
//!
//! gives a surjective homomorphism onto S3 whose kernel is the Klein
//! four-group K4 = {id, (12)(34), (13)(24), (14)(23)}.

use crate::permutation::Permutation;

/// An element of the symmetric group on four labels.
pub type S4 = Permutation<4>;

/// An element of the symmetric group on three labels.
pub type S3 = Permutation<3>;

/// The three pairings, in letter order `a, b, c`.
const PAIRINGS: [[[usize; 2]; 2]; 3] = [[[0, 3], [1, 2]], [[0, 2], [1, 3]], [[0, 1], [2, 3]]];

/// Identifies a pairing by the partner of vertex `1` (index 0).
fn pairing_with_partner(partner: usize) -> u8 {
    match partner {
        3 => 0,
        2 => 1,
        // partner is 1: the pairing {1,2} {3,4}
        _ => 2,
    }
}

/// Maps an S4 element to its image in S3.
///
/// # Example
///
/// ```
/// use quotient_group::{alphabet::{DIGITS, LETTERS}, notation::parse_cycles, quotient::quotient_image};
///
/// let sigma = parse_cycles("(123)", &DIGITS).unwrap();
/// assert_eq!(quotient_image(&sigma).cycle_notation(&LETTERS), "(abc)");
/// ```
#[must_use]
pub fn quotient_image(sigma: &S4) -> S3 {
    let images = PAIRINGS.map(|pairing| {
        let moved = pairing.map(|pair| pair.map(|v| sigma.apply(v)));
        let partner = moved
            .iter()
            .find_map(|&[x, y]| match (x, y) {
                (0, other) | (other, 0) => Some(other),
                _ => None,
            })
            .unwrap_or(1);
        pairing_with_partner(partner)
    });
    S3::from_images_unchecked(images)
}

/// Returns the kernel K4 in display order: `id, (12)(34), (13)(24), (14)(23)`.
#[must_use]
pub fn kernel() -> Vec<S4> {
    S4::all()
        .into_iter()
        .filter(|sigma| quotient_image(sigma).is_identity())
        .collect()
}

/// A coset of K4: the four S4 elements sharing one S3 image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coset {
    /// The shared image in S3.
    pub image: S3,
    /// The members, in display order.
    pub members: Vec<S4>,
}

impl Coset {
    /// Returns true if `sigma` belongs to this coset.
    #[must_use]
    pub fn contains(&self, sigma: &S4) -> bool {
        self.members.contains(sigma)
    }

    /// Returns true if this is the kernel itself.
    #[must_use]
    pub fn is_kernel(&self) -> bool {
        self.image.is_identity()
    }
}

/// Returns the six cosets of K4, ordered by their S3 image
/// (`id, (ab), (ac), (bc), (abc), (acb)`).
#[must_use]
pub fn cosets() -> Vec<Coset> {
    let elements = S4::all();
    S3::all()
        .into_iter()
        .map(|image| Coset {
            image,
            members: elements
                .iter()
                .filter(|sigma| quotient_image(sigma) == image)
                .copied()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DIGITS, LETTERS};
    use crate::notation::parse_cycles;

    fn image_of(cycle: &str) -> String {
        let sigma = parse_cycles(cycle, &DIGITS).unwrap();
        quotient_image(&sigma).cycle_notation(&LETTERS)
    }

    #[test]
    fn transpositions_map_to_transpositions() {
        assert_eq!(image_of("(12)"), "(ab)");
        assert_eq!(image_of("(34)"), "(ab)");
        assert_eq!(image_of("(13)"), "(ac)");
        assert_eq!(image_of("(14)"), "(bc)");
    }

    #[test]
    fn four_cycles() {
        assert_eq!(image_of("(1234)"), "(ac)");
        assert_eq!(image_of("(1243)"), "(bc)");
        assert_eq!(image_of("(1324)"), "(ab)");
    }

    #[test]
    fn kernel_is_klein_four() {
        let names: Vec<String> = kernel().iter().map(|k| k.cycle_notation(&DIGITS)).collect();
        assert_eq!(names, ["() = id", "(12)(34)", "(13)(24)", "(14)(23)"]);
    }

    #[test]
    fn six_cosets_of_four() {
        let cosets = cosets();
        assert_eq!(cosets.len(), 6);
        assert!(cosets.iter().all(|c| c.members.len() == 4));
        assert!(cosets[0].is_kernel());
        assert_eq!(cosets[0].members, kernel());

        let second: Vec<String> = cosets[1]
            .members
            .iter()
            .map(|m| m.cycle_notation(&DIGITS))
            .collect();
        assert_eq!(second, ["(12)", "(34)", "(1324)", "(1423)"]);
        assert_eq!(cosets[1].image.cycle_notation(&LETTERS), "(ab)");
    }
}
