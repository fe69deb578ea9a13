//! Dense coordinate-conjugation tables over the reduced subgroup.
//!
//! Both tables store `s * x * s^-1` for every coordinate value x and every
//! U/D-axis-preserving symmetry s, flattened as `x * N_SYM_D4H + s`, so the
//! search can conjugate a coordinate without round-tripping through a full
//! cube state.

use crate::{N_SYM_D4H, group::Symmetries};
use cubie::{CubieCube, N_TWIST, N_UD_EDGES};

/// Corner-orientation conjugation, `N_TWIST * N_SYM_D4H` entries.
#[must_use]
pub fn twist_conj_table(syms: &Symmetries) -> Vec<u16> {
    let mut table = vec![0_u16; N_TWIST * N_SYM_D4H];
    let mut cc = CubieCube::default();
    for twist in 0..N_TWIST {
        cc.set_twist(twist as u16);
        for s in 0..N_SYM_D4H {
            let mut ss = syms.cubes[s].clone();
            ss.corner_multiply(&cc);
            ss.corner_multiply(&syms.cubes[syms.inv_idx[s] as usize]);
            table[N_SYM_D4H * twist + s] = ss.get_twist();
        }
    }
    table
}

/// U/D-edge-permutation conjugation, `N_UD_EDGES * N_SYM_D4H` entries.
#[must_use]
pub fn ud_edges_conj_table(syms: &Symmetries) -> Vec<u16> {
    let mut table = vec![0_u16; N_UD_EDGES * N_SYM_D4H];
    let mut cc = CubieCube::default();
    for ud_edges in 0..N_UD_EDGES {
        cc.set_ud_edges(ud_edges as u16);
        for s in 0..N_SYM_D4H {
            let mut ss = syms.cubes[s].clone();
            ss.edge_multiply(&cc);
            ss.edge_multiply(&syms.cubes[syms.inv_idx[s] as usize]);
            table[N_SYM_D4H * ud_edges + s] = ss.get_ud_edges();
        }
    }
    table
}
