//! S4 as the full symmetry group of a regular tetrahedron.
//!
//! The vertices `1..4` sit at alternate corners of the cube `[-1, 1]^3`.
//! Every permutation of the vertices extends to a unique linear map of
//! space: even permutations are rotations, odd ones are reflections
//! (possibly composed with a rotation).

use crate::alphabet::DIGITS;
use crate::quotient::S4;

/// A 3×3 matrix, row-major.
pub type Matrix3 = [[f64; 3]; 3];

/// Coordinates of vertices `1, 2, 3, 4`.
pub const VERTICES: [[f64; 3]; 4] = [
    [-1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Inverse of the matrix whose columns are vertices 1, 2, 3.
const VERTEX_BASIS_INVERSE: Matrix3 = [[-0.5, 0.0, 0.5], [0.0, 0.5, 0.5], [-0.5, 0.5, 0.0]];

/// Returns the linear map sending vertex `i` to vertex `σ(i)`.
///
/// Vertices 1, 2, 3 form a basis, so the map is fixed by where it sends
/// them; vertex 4 follows because the four vertices sum to zero.
///
/// ```
/// use quotient_group::{alphabet::DIGITS, notation::parse_cycles, tetrahedron::{apply, symmetry_matrix, VERTICES}};
///
/// let sigma = parse_cycles("(12)", &DIGITS).unwrap();
/// let m = symmetry_matrix(&sigma);
/// assert_eq!(apply(&m, &VERTICES[0]), VERTICES[1]);
/// assert_eq!(apply(&m, &VERTICES[3]), VERTICES[3]);
/// ```
#[must_use]
pub fn symmetry_matrix(sigma: &S4) -> Matrix3 {
    let images: Matrix3 =
        core::array::from_fn(|row| core::array::from_fn(|col| VERTICES[sigma.apply(col)][row]));
    multiply(&images, &VERTEX_BASIS_INVERSE)
}

/// Returns true if `sigma` acts as a rotation (determinant `+1`).
#[must_use]
pub fn is_rotation(sigma: &S4) -> bool {
    sigma.sign() == 1
}

/// File name of the animation for `sigma`, keyed on its one-line form.
///
/// ```
/// use quotient_group::{alphabet::DIGITS, notation::parse_cycles, tetrahedron::animation_file};
///
/// let sigma = parse_cycles("(123)", &DIGITS).unwrap();
/// assert_eq!(animation_file(&sigma), "tetrahedron_reflection_swap_2314.gif");
/// ```
#[must_use]
pub fn animation_file(sigma: &S4) -> String {
    format!("tetrahedron_reflection_swap_{}.gif", sigma.one_line(&DIGITS))
}

/// Matrix product `a · b`.
#[must_use]
pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    core::array::from_fn(|i| core::array::from_fn(|j| (0..3).map(|k| a[i][k] * b[k][j]).sum()))
}

/// Matrix-vector product `m · v`.
#[must_use]
pub fn apply(m: &Matrix3, v: &[f64; 3]) -> [f64; 3] {
    core::array::from_fn(|i| (0..3).map(|k| m[i][k] * v[k]).sum())
}

/// Transpose.
#[must_use]
pub fn transpose(m: &Matrix3) -> Matrix3 {
    core::array::from_fn(|i| core::array::from_fn(|j| m[j][i]))
}

/// Determinant by cofactor expansion along the first row.
#[must_use]
pub fn determinant(m: &Matrix3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: Matrix3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    #[test]
    fn basis_inverse_is_inverse() {
        let basis: Matrix3 =
            core::array::from_fn(|row| core::array::from_fn(|col| VERTICES[col][row]));
        assert_eq!(multiply(&basis, &VERTEX_BASIS_INVERSE), IDENTITY);
    }

    #[test]
    fn identity_maps_to_identity_matrix() {
        assert_eq!(symmetry_matrix(&S4::identity()), IDENTITY);
    }

    #[test]
    fn every_symmetry_permutes_vertices() {
        for sigma in S4::all() {
            let m = symmetry_matrix(&sigma);
            for (i, v) in VERTICES.iter().enumerate() {
                assert_eq!(apply(&m, v), VERTICES[sigma.apply(i)]);
            }
        }
    }

    #[test]
    fn symmetries_are_orthogonal_with_signed_determinant() {
        for sigma in S4::all() {
            let m = symmetry_matrix(&sigma);
            assert_eq!(multiply(&m, &transpose(&m)), IDENTITY);
            assert_eq!(determinant(&m), f64::from(sigma.sign()));
            assert_eq!(is_rotation(&sigma), determinant(&m) > 0.0);
        }
    }
}
