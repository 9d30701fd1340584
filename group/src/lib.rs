//! The symmetric group S4 and its quotient S4/K4 ≅ S3 as typed Rust data.
//!
//! Every element of S4 can be written in cycle notation (`(123)`) or one-line
//! notation (`2314`). This crate converts between the two, reads off the
//! explicit action `i ↦ σ(i)`, maps each element to its image in S3 under the
//! quotient by the Klein four-group, and lists the six cosets of that kernel.
//! Nothing is transcribed by hand: the [`NotationTable`] is derived from the
//! permutations themselves.
//!
//! # Entry Point
//!
//! ```
//! use quotient_group::{Notation, NotationTable};
//!
//! let table = NotationTable::full();
//! let row = table.find(Notation::Cycle, "(123)").unwrap();
//! assert_eq!(row.one_line, "2314");
//! assert_eq!(row.image_cycle, "(abc)");
//! assert_eq!(table.cosets().len(), 6);
//! ```
//!
//! # Explicit actions
//!
//! ```
//! use quotient_group::{action::explicit_action, alphabet::LETTERS};
//!
//! assert_eq!(
//!     explicit_action("(abc)", &LETTERS),
//!     [('a', 'b'), ('b', 'c'), ('c', 'a')]
//! );
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod action;
pub mod alphabet;
pub mod error;
pub mod notation;
pub mod permutation;
pub mod quotient;
pub mod table;
pub mod tetrahedron;

pub use error::NotationError;
pub use notation::{Notation, IDENTITY};
pub use permutation::{CycleType, Permutation};
pub use quotient::{Coset, S3, S4};
pub use table::{Entry, NotationTable};
