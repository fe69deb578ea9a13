//! The 48-element symmetry group of the cube and its lookup tables.

use crate::{N_SYM, error::SymTableError};
use cubie::{
    Corner, CubieCube, Edge,
    moves::{MOVE_CUBE, N_MOVE},
};

/// 120° clockwise rotation around the long diagonal through URF and DBL.
const ROT_URF3: CubieCube = CubieCube::new(
    [
        Corner::URF,
        Corner::DFR,
        Corner::DLF,
        Corner::UFL,
        Corner::UBR,
        Corner::DRB,
        Corner::DBL,
        Corner::ULB,
    ],
    [1, 2, 1, 2, 2, 1, 2, 1],
    [
        Edge::UF,
        Edge::FR,
        Edge::DF,
        Edge::FL,
        Edge::UB,
        Edge::BR,
        Edge::DB,
        Edge::BL,
        Edge::UR,
        Edge::DR,
        Edge::DL,
        Edge::UL,
    ],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1],
);

/// 180° rotation around the axis through the F and B face centers.
const ROT_F2: CubieCube = CubieCube::new(
    [
        Corner::DLF,
        Corner::DFR,
        Corner::DRB,
        Corner::DBL,
        Corner::UFL,
        Corner::URF,
        Corner::UBR,
        Corner::ULB,
    ],
    [0; 8],
    [
        Edge::DL,
        Edge::DF,
        Edge::DR,
        Edge::DB,
        Edge::UL,
        Edge::UF,
        Edge::UR,
        Edge::UB,
        Edge::FL,
        Edge::FR,
        Edge::BR,
        Edge::BL,
    ],
    [0; 12],
);

/// 90° clockwise rotation around the axis through the U and D face centers.
const ROT_U4: CubieCube = CubieCube::new(
    [
        Corner::UBR,
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::DRB,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
    ],
    [0; 8],
    [
        Edge::UB,
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::DB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::BR,
        Edge::FR,
        Edge::FL,
        Edge::BL,
    ],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1],
);

/// Reflection at the plane through the U, D, F and B face centers. The
/// corner orientations of 3 mark every corner as mirrored.
const MIRR_LR2: CubieCube = CubieCube::new(
    [
        Corner::UFL,
        Corner::URF,
        Corner::UBR,
        Corner::ULB,
        Corner::DLF,
        Corner::DFR,
        Corner::DRB,
        Corner::DBL,
    ],
    [3; 8],
    [
        Edge::UL,
        Edge::UF,
        Edge::UR,
        Edge::UB,
        Edge::DL,
        Edge::DF,
        Edge::DR,
        Edge::DB,
        Edge::FL,
        Edge::FR,
        Edge::BR,
        Edge::BL,
    ],
    [0; 12],
);

/// The symmetry group and its precomputed lookup tables. Built once by
/// [`Symmetries::new`] and shared read-only afterwards.
#[derive(Debug)]
pub struct Symmetries {
    /// The 48 symmetries as cube states, identity at index 0. The first
    /// [`N_SYM_D4H`] entries preserve the U/D axis.
    pub cubes: Box<[CubieCube]>,
    /// `cubes[inv_idx[s]]` is the inverse of `cubes[s]`.
    pub inv_idx: [u8; N_SYM],
    /// Cayley table: `cubes[i] * cubes[j] == cubes[mult_sym[i][j]]`.
    pub mult_sym: [[u8; N_SYM]; N_SYM],
    /// `conj_move[m][s]` is the move equal to `s * m * s^-1`.
    pub conj_move: [[u8; N_SYM]; N_MOVE],
}

impl Symmetries {
    /// Build the full group from the four generators.
    ///
    /// # Errors
    ///
    /// Any failure indicates a definitional bug in the generators or the
    /// move set; no table can be trusted in that case.
    pub fn new() -> Result<Self, SymTableError> {
        let cubes = enumerate_group()?;
        let inv_idx = inverse_indices(&cubes)?;
        let mult_sym = multiplication_table(&cubes)?;
        let conj_move = conjugate_moves(&cubes, &inv_idx)?;
        Ok(Symmetries {
            cubes,
            inv_idx,
            mult_sym,
            conj_move,
        })
    }
}

/// Expand the generators into all 48 symmetries by iterating the exponents
/// (urf3, f2, u4, lr2) in a fixed nested order. The accumulated product is
/// recorded before each innermost step, so the mirror alternates fastest and
/// the first sixteen entries are exactly the U/D-axis-preserving subgroup.
fn enumerate_group() -> Result<Box<[CubieCube]>, SymTableError> {
    let mut cubes = Vec::with_capacity(N_SYM);
    let mut cc = CubieCube::default();
    for _urf3 in 0..3 {
        for _f2 in 0..2 {
            for _u4 in 0..4 {
                for _lr2 in 0..2 {
                    cubes.push(cc.clone());
                    cc.multiply(&MIRR_LR2);
                }
                cc.multiply(&ROT_U4);
            }
            cc.multiply(&ROT_F2);
        }
        cc.multiply(&ROT_URF3);
    }
    debug_assert_eq!(cubes.len(), N_SYM);
    for (index, a) in cubes.iter().enumerate() {
        if cubes[..index].contains(a) {
            return Err(SymTableError::DuplicateSymmetry { index });
        }
    }
    Ok(cubes.into_boxed_slice())
}

/// Find the inverse of every symmetry. A product fixing the three corners
/// URF, UFL and ULB is the identity: the group action on those corners is
/// faithful for this construction, so checking them suffices.
fn inverse_indices(cubes: &[CubieCube]) -> Result<[u8; N_SYM], SymTableError> {
    let mut inv_idx = [0_u8; N_SYM];
    for (j, cube) in cubes.iter().enumerate() {
        let found = (0..N_SYM).find(|&i| {
            let mut cc = cube.clone();
            cc.corner_multiply(&cubes[i]);
            cc.cp[0] == Corner::URF && cc.cp[1] == Corner::UFL && cc.cp[2] == Corner::ULB
        });
        inv_idx[j] = found.ok_or(SymTableError::MissingInverse { index: j })? as u8;
    }
    Ok(inv_idx)
}

/// The full Cayley table, found by computing every pairwise product and
/// locating it among the 48 elements by state equality.
fn multiplication_table(cubes: &[CubieCube]) -> Result<[[u8; N_SYM]; N_SYM], SymTableError> {
    let mut mult_sym = [[0_u8; N_SYM]; N_SYM];
    for i in 0..N_SYM {
        for j in 0..N_SYM {
            let mut cc = cubes[i].clone();
            cc.multiply(&cubes[j]);
            let k = cubes
                .iter()
                .position(|s| *s == cc)
                .ok_or(SymTableError::ProductNotInGroup { i, j })?;
            mult_sym[i][j] = k as u8;
        }
    }
    Ok(mult_sym)
}

/// For every move m and symmetry s, the move equal to `s * m * s^-1`. Every
/// conjugate of an elementary move is again an elementary move.
fn conjugate_moves(
    cubes: &[CubieCube],
    inv_idx: &[u8; N_SYM],
) -> Result<[[u8; N_SYM]; N_MOVE], SymTableError> {
    let mut conj_move = [[0_u8; N_SYM]; N_MOVE];
    for s in 0..N_SYM {
        for (mv, move_cube) in MOVE_CUBE.iter().enumerate() {
            let mut ss = cubes[s].clone();
            ss.multiply(move_cube);
            ss.multiply(&cubes[inv_idx[s] as usize]);
            let m2 = MOVE_CUBE
                .iter()
                .position(|mc| *mc == ss)
                .ok_or(SymTableError::ConjugateMoveNotFound { mv, sym: s })?;
            conj_move[mv][s] = m2 as u8;
        }
    }
    Ok(conj_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_SYM_D4H;
    use itertools::Itertools;

    #[test]
    fn group_has_48_distinct_elements_with_identity_first() {
        let syms = Symmetries::new().unwrap();
        assert_eq!(syms.cubes.len(), N_SYM);
        assert_eq!(syms.cubes[0], CubieCube::SOLVED);
        let identity_count = syms
            .cubes
            .iter()
            .filter(|s| **s == CubieCube::SOLVED)
            .count();
        assert_eq!(identity_count, 1);
    }

    #[test]
    fn reduced_subgroup_preserves_ud_axis() {
        let syms = Symmetries::new().unwrap();
        // A symmetry keeps the U/D axis iff it maps U/D-layer edges among
        // themselves.
        for s in 0..N_SYM_D4H {
            for slot in 0..8 {
                assert!((syms.cubes[s].ep[slot] as u8) < 8, "symmetry {s}");
            }
        }
    }

    #[test]
    fn reduced_subgroup_closed_under_inverse() {
        let syms = Symmetries::new().unwrap();
        for s in 0..N_SYM_D4H {
            assert!((syms.inv_idx[s] as usize) < N_SYM_D4H);
        }
    }

    #[test]
    fn inverses_multiply_to_identity() {
        let syms = Symmetries::new().unwrap();
        for i in 0..N_SYM {
            let inv = syms.inv_idx[i] as usize;
            assert_eq!(syms.mult_sym[i][inv], 0);
            assert_eq!(syms.mult_sym[inv][i], 0);
        }
    }

    #[test]
    fn cayley_rows_and_columns_are_permutations() {
        let syms = Symmetries::new().unwrap();
        for i in 0..N_SYM {
            assert!(syms.mult_sym[i].iter().all_unique());
            assert!((0..N_SYM).map(|j| syms.mult_sym[j][i]).all_unique());
        }
    }

    #[test]
    fn double_conjugation_restores_move() {
        let syms = Symmetries::new().unwrap();
        for m in 0..N_MOVE {
            for s in 0..N_SYM {
                let conjugated = syms.conj_move[m][s] as usize;
                let inv = syms.inv_idx[s] as usize;
                assert_eq!(syms.conj_move[conjugated][inv] as usize, m);
            }
        }
    }
}
