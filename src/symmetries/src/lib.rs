//! Symmetry reduction for the two-phase solver.
//!
//! The cube has 48 geometric symmetries. Conjugating a position by a symmetry
//! yields a position that is exactly as hard to solve, so pruning data only
//! needs to be stored once per equivalence class. This crate builds the
//! symmetry group from its four generators, the group-level lookup tables
//! (inverses, products, move conjugation), the coordinate-level conjugation
//! tables, and the orbit classification of the two large coordinate domains,
//! and persists the expensive results as flat binary files.

#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::cast_possible_truncation)]

pub mod classify;
pub mod conjugate;
pub mod error;
pub mod group;
pub mod store;
pub mod tables;

pub use classify::SymClasses;
pub use error::SymTableError;
pub use group::Symmetries;
pub use tables::SymTables;

/// Order of the full symmetry group.
pub const N_SYM: usize = 48;
/// Order of the subgroup preserving the U/D axis, used for coordinate
/// conjugation. These are the first sixteen symmetries in enumeration order.
pub const N_SYM_D4H: usize = 16;
/// Number of flip-slice equivalence classes under the reduced subgroup.
pub const N_FLIPSLICE_CLASS: usize = 64430;
/// Number of corner permutation equivalence classes under the reduced
/// subgroup.
pub const N_CORNERS_CLASS: usize = 2768;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
