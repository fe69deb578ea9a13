//! Cube state on the cubie level: permutations and orientations of the 8
//! corners and 12 edges, the group operations on them, and the compact
//! integer coordinates the solver tables are indexed by.

#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]

pub mod moves;

/// Number of corner orientation patterns (3^7).
pub const N_TWIST: usize = 2187;
/// Number of edge orientation patterns (2^11).
pub const N_FLIP: usize = 2048;
/// Number of placements of the four slice edges (12 choose 4).
pub const N_SLICE: usize = 495;
/// Number of corner permutations (8!).
pub const N_CORNERS: usize = 40320;
/// Number of permutations of the eight U/D-layer edges (8!).
pub const N_UD_EDGES: usize = 40320;

/// The corner positions, in the fixed order the coordinates are defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];
}

/// The edge positions. FR, FL, BL and BR form the middle slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];
}

/// A cube state as a permutation plus orientation of corners and edges.
///
/// Corner orientations are normally 0..=2. Values 3..=5 additionally mark a
/// corner as mirrored; they only occur in reflection symmetries, never in
/// reachable cube states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubieCube {
    pub cp: [Corner; 8],
    pub co: [u8; 8],
    pub ep: [Edge; 12],
    pub eo: [u8; 12],
}

impl Default for CubieCube {
    fn default() -> Self {
        CubieCube::SOLVED
    }
}

impl CubieCube {
    pub const SOLVED: CubieCube = CubieCube::new(Corner::ALL, [0; 8], Edge::ALL, [0; 12]);

    #[must_use]
    pub const fn new(cp: [Corner; 8], co: [u8; 8], ep: [Edge; 12], eo: [u8; 12]) -> Self {
        CubieCube { cp, co, ep, eo }
    }

    /// Compose with `b`, restricted to the corners: `self = self * b`.
    ///
    /// The orientation arithmetic distinguishes mirrored corners (orientation
    /// 3..=5) so that compositions involving a reflection symmetry stay
    /// consistent: mirrored * mirrored is regular again.
    pub fn corner_multiply(&mut self, b: &CubieCube) {
        let mut cp = [Corner::URF; 8];
        let mut co = [0_u8; 8];
        for i in 0..8 {
            cp[i] = self.cp[b.cp[i] as usize];
            let ori_a = self.co[b.cp[i] as usize];
            let ori_b = b.co[i];
            co[i] = if ori_a < 3 && ori_b < 3 {
                // two regular corners
                let ori = ori_a + ori_b;
                if ori >= 3 { ori - 3 } else { ori }
            } else if ori_a < 3 {
                // b is mirrored, the composition stays mirrored
                let ori = ori_a + ori_b;
                if ori >= 6 { ori - 3 } else { ori }
            } else if ori_b < 3 {
                // self is mirrored, the composition stays mirrored
                let ori = ori_a - ori_b;
                if ori < 3 { ori + 3 } else { ori }
            } else {
                // both mirrored, the composition is regular
                let ori = i16::from(ori_a) - i16::from(ori_b);
                if ori < 0 { (ori + 3) as u8 } else { ori as u8 }
            };
        }
        self.cp = cp;
        self.co = co;
    }

    /// Compose with `b`, restricted to the edges: `self = self * b`.
    pub fn edge_multiply(&mut self, b: &CubieCube) {
        let mut ep = [Edge::UR; 12];
        let mut eo = [0_u8; 12];
        for i in 0..12 {
            ep[i] = self.ep[b.ep[i] as usize];
            eo[i] = (b.eo[i] + self.eo[b.ep[i] as usize]) % 2;
        }
        self.ep = ep;
        self.eo = eo;
    }

    /// Full composition of both sub-actions: `self = self * b`.
    pub fn multiply(&mut self, b: &CubieCube) {
        self.corner_multiply(b);
        self.edge_multiply(b);
    }

    /// Corner orientation coordinate, 0..2187.
    #[must_use]
    pub fn get_twist(&self) -> u16 {
        let mut twist = 0_u16;
        for i in 0..7 {
            twist = 3 * twist + u16::from(self.co[i]);
        }
        twist
    }

    /// Set the corner orientations from a twist coordinate. The orientation
    /// of the last corner is forced by the total-twist parity.
    pub fn set_twist(&mut self, mut twist: u16) {
        let mut parity = 0_u16;
        for i in (0..7).rev() {
            self.co[i] = (twist % 3) as u8;
            parity += twist % 3;
            twist /= 3;
        }
        self.co[7] = ((3 - parity % 3) % 3) as u8;
    }

    /// Edge orientation coordinate, 0..2048.
    #[must_use]
    pub fn get_flip(&self) -> u16 {
        let mut flip = 0_u16;
        for i in 0..11 {
            flip = 2 * flip + u16::from(self.eo[i]);
        }
        flip
    }

    /// Set the edge orientations from a flip coordinate, last edge by parity.
    pub fn set_flip(&mut self, mut flip: u16) {
        let mut parity = 0_u16;
        for i in (0..11).rev() {
            self.eo[i] = (flip % 2) as u8;
            parity += flip % 2;
            flip /= 2;
        }
        self.eo[11] = ((2 - parity % 2) % 2) as u8;
    }

    /// Location of the four slice edges as a binomial-rank index, 0..495.
    /// Ignores which slice edge sits where and all edge orientations.
    #[must_use]
    pub fn get_slice(&self) -> u16 {
        let mut a = 0_u16;
        let mut x = 0_u16;
        for j in (0..12).rev() {
            if self.ep[j] as u8 >= Edge::FR as u8 {
                a += c_nk(11 - j as u16, x + 1);
                x += 1;
            }
        }
        a
    }

    /// Place the four slice edges according to a slice coordinate. The
    /// remaining slots are filled with the U/D-layer edges in order, so the
    /// resulting permutation is a deterministic function of the coordinate.
    pub fn set_slice(&mut self, idx: u16) {
        const SLICE_EDGES: [Edge; 4] = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];
        const OTHER_EDGES: [Edge; 8] = [
            Edge::UR,
            Edge::UF,
            Edge::UL,
            Edge::UB,
            Edge::DR,
            Edge::DF,
            Edge::DL,
            Edge::DB,
        ];
        let mut slots: [Option<Edge>; 12] = [None; 12];
        let mut a = idx;
        let mut x = 4_u16;
        for (j, slot) in slots.iter_mut().enumerate() {
            if x > 0 && a >= c_nk(11 - j as u16, x) {
                *slot = Some(SLICE_EDGES[(4 - x) as usize]);
                a -= c_nk(11 - j as u16, x);
                x -= 1;
            }
        }
        let mut other = OTHER_EDGES.iter();
        for (slot, e) in slots.iter().zip(self.ep.iter_mut()) {
            *e = slot.unwrap_or_else(|| *other.next().unwrap());
        }
    }

    /// Corner permutation coordinate, 0..40320.
    #[must_use]
    pub fn get_corners(&self) -> u16 {
        let mut perm = self.cp;
        let mut b = 0_u16;
        for j in (1..8).rev() {
            let mut k = 0_u16;
            while perm[j] as usize != j {
                perm[0..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        b
    }

    /// Set the corner permutation from its coordinate.
    pub fn set_corners(&mut self, mut idx: u16) {
        self.cp = Corner::ALL;
        for j in 0..8 {
            let k = idx % (j as u16 + 1);
            idx /= j as u16 + 1;
            for _ in 0..k {
                self.cp[0..=j].rotate_right(1);
            }
        }
    }

    /// Permutation coordinate of the eight U/D-layer edges, 0..40320.
    ///
    /// Only meaningful when the four slice edges actually sit in the slice;
    /// otherwise the first eight slots hold slice edges and no rank exists.
    #[must_use]
    pub fn get_ud_edges(&self) -> u16 {
        let mut perm: [Edge; 8] = self.ep[0..8].try_into().unwrap();
        let mut b = 0_u16;
        for j in (1..8).rev() {
            let mut k = 0_u16;
            while perm[j] as usize != j {
                perm[0..=j].rotate_left(1);
                k += 1;
            }
            b = (j as u16 + 1) * b + k;
        }
        b
    }

    /// Set the permutation of the eight U/D-layer edges from its coordinate.
    /// The slice edge slots are left untouched.
    pub fn set_ud_edges(&mut self, mut idx: u16) {
        self.ep[0..8].copy_from_slice(&Edge::ALL[0..8]);
        for j in 0..8 {
            let k = idx % (j as u16 + 1);
            idx /= j as u16 + 1;
            for _ in 0..k {
                self.ep[0..=j].rotate_right(1);
            }
        }
    }
}

/// Binomial coefficient n choose k.
fn c_nk(n: u16, mut k: u16) -> u16 {
    if n < k {
        return 0;
    }
    if k > n / 2 {
        k = n - k;
    }
    let mut s = 1_u32;
    let mut i = u32::from(n);
    let mut j = 1_u32;
    while i != u32::from(n - k) {
        s *= i;
        s /= j;
        i -= 1;
        j += 1;
    }
    s as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MOVE_CUBE;

    #[test]
    fn binomials() {
        assert_eq!(c_nk(11, 4), 330);
        assert_eq!(c_nk(12, 4), 495);
        assert_eq!(c_nk(3, 5), 0);
        assert_eq!(c_nk(7, 0), 1);
    }

    #[test]
    fn twist_round_trip() {
        let mut cc = CubieCube::default();
        for twist in 0..N_TWIST as u16 {
            cc.set_twist(twist);
            assert_eq!(cc.get_twist(), twist);
            // total twist must stay a multiple of 3
            assert_eq!(cc.co.iter().map(|&o| u16::from(o)).sum::<u16>() % 3, 0);
        }
    }

    #[test]
    fn flip_round_trip() {
        let mut cc = CubieCube::default();
        for flip in 0..N_FLIP as u16 {
            cc.set_flip(flip);
            assert_eq!(cc.get_flip(), flip);
            assert_eq!(cc.eo.iter().map(|&o| u16::from(o)).sum::<u16>() % 2, 0);
        }
    }

    #[test]
    fn slice_round_trip() {
        let mut cc = CubieCube::default();
        for slice in 0..N_SLICE as u16 {
            cc.set_slice(slice);
            assert_eq!(cc.get_slice(), slice);
        }
    }

    #[test]
    fn corners_round_trip() {
        let mut cc = CubieCube::default();
        for corners in 0..N_CORNERS as u16 {
            cc.set_corners(corners);
            assert_eq!(cc.get_corners(), corners);
        }
    }

    #[test]
    fn ud_edges_round_trip() {
        let mut cc = CubieCube::default();
        for ud_edges in 0..N_UD_EDGES as u16 {
            cc.set_ud_edges(ud_edges);
            assert_eq!(cc.get_ud_edges(), ud_edges);
        }
    }

    #[test]
    fn quarter_turn_has_order_four() {
        for face in 0..6 {
            let quarter = &MOVE_CUBE[3 * face];
            let mut cc = CubieCube::default();
            for _ in 0..4 {
                cc.multiply(quarter);
            }
            assert_eq!(cc, CubieCube::SOLVED);
        }
    }

    #[test]
    fn half_turn_matches_two_quarter_turns() {
        for face in 0..6 {
            let mut cc = CubieCube::default();
            cc.multiply(&MOVE_CUBE[3 * face]);
            cc.multiply(&MOVE_CUBE[3 * face]);
            assert_eq!(cc, MOVE_CUBE[3 * face + 1]);
        }
    }

    #[test]
    fn move_coordinates_stay_in_range() {
        for m in MOVE_CUBE.iter() {
            assert!((m.get_twist() as usize) < N_TWIST);
            assert!((m.get_flip() as usize) < N_FLIP);
            assert!((m.get_slice() as usize) < N_SLICE);
            assert!((m.get_corners() as usize) < N_CORNERS);
        }
    }
}
