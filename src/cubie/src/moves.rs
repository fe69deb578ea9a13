//! The eighteen elementary face turns as cubie-level transformations.

use crate::{Corner, CubieCube, Edge};
use std::sync::LazyLock;

/// Number of elementary moves.
pub const N_MOVE: usize = 18;

const U_MOVE: CubieCube = CubieCube::new(
    [
        Corner::UBR,
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ],
    [0; 8],
    [
        Edge::UB,
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ],
    [0; 12],
);

const R_MOVE: CubieCube = CubieCube::new(
    [
        Corner::DFR,
        Corner::UFL,
        Corner::ULB,
        Corner::URF,
        Corner::DRB,
        Corner::DLF,
        Corner::DBL,
        Corner::UBR,
    ],
    [2, 0, 0, 1, 1, 0, 0, 2],
    [
        Edge::FR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::BR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
        Edge::FL,
        Edge::BL,
        Edge::UR,
    ],
    [0; 12],
);

const F_MOVE: CubieCube = CubieCube::new(
    [
        Corner::UFL,
        Corner::DLF,
        Corner::ULB,
        Corner::UBR,
        Corner::URF,
        Corner::DFR,
        Corner::DBL,
        Corner::DRB,
    ],
    [1, 2, 0, 0, 2, 1, 0, 0],
    [
        Edge::UR,
        Edge::FL,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::FR,
        Edge::DL,
        Edge::DB,
        Edge::UF,
        Edge::DF,
        Edge::BL,
        Edge::BR,
    ],
    [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
);

const D_MOVE: CubieCube = CubieCube::new(
    [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
        Corner::DFR,
    ],
    [0; 8],
    [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::DR,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ],
    [0; 12],
);

const L_MOVE: CubieCube = CubieCube::new(
    [
        Corner::URF,
        Corner::ULB,
        Corner::DBL,
        Corner::UBR,
        Corner::DFR,
        Corner::UFL,
        Corner::DLF,
        Corner::DRB,
    ],
    [0, 1, 2, 0, 0, 2, 1, 0],
    [
        Edge::UR,
        Edge::UF,
        Edge::BL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::FL,
        Edge::DB,
        Edge::FR,
        Edge::UL,
        Edge::DL,
        Edge::BR,
    ],
    [0; 12],
);

const B_MOVE: CubieCube = CubieCube::new(
    [
        Corner::URF,
        Corner::UFL,
        Corner::UBR,
        Corner::DRB,
        Corner::DFR,
        Corner::DLF,
        Corner::ULB,
        Corner::DBL,
    ],
    [0, 0, 1, 2, 0, 0, 2, 1],
    [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::BR,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::BL,
        Edge::FR,
        Edge::FL,
        Edge::UB,
        Edge::DB,
    ],
    [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
);

const BASIC_MOVE_CUBE: [CubieCube; 6] = [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE];

/// All eighteen moves in the fixed order U, U2, U', R, R2, R', F, F2, F',
/// D, D2, D', L, L2, L', B, B2, B'. Index `3 * face + (power - 1)`.
pub static MOVE_CUBE: LazyLock<[CubieCube; N_MOVE]> = LazyLock::new(|| {
    let mut moves = Vec::with_capacity(N_MOVE);
    for basic in &BASIC_MOVE_CUBE {
        let mut cc = CubieCube::default();
        for _ in 0..3 {
            cc.multiply(basic);
            moves.push(cc.clone());
        }
    }
    moves.try_into().unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_moves_distinct() {
        for (i, a) in MOVE_CUBE.iter().enumerate() {
            for b in &MOVE_CUBE[..i] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn inverse_moves_cancel() {
        for face in 0..6 {
            let mut cc = CubieCube::default();
            cc.multiply(&MOVE_CUBE[3 * face]);
            cc.multiply(&MOVE_CUBE[3 * face + 2]);
            assert_eq!(cc, CubieCube::SOLVED);
        }
    }
}
