//! Load-or-generate orchestration for all symmetry tables.

use crate::{
    N_FLIPSLICE_CLASS, N_SYM_D4H,
    classify::{self, SymClasses},
    conjugate,
    error::SymTableError,
    group::Symmetries,
    start, store::TableStore, success,
};
use cubie::{N_CORNERS, N_FLIP, N_SLICE, N_TWIST, N_UD_EDGES};
use log::info;
use std::{path::PathBuf, time::Instant};

/// Default directory for the persisted tables, relative to the working
/// directory. Callers with other layouts pass their own path.
pub const DEFAULT_TABLE_DIR: &str = "tables";

const CONJ_TWIST: &str = "conj_twist";
const CONJ_UD_EDGES: &str = "conj_ud_edges";
const FS_CLASSIDX: &str = "fs_classidx";
const FS_SYM: &str = "fs_sym";
const FS_REP: &str = "fs_rep";
const CO_CLASSIDX: &str = "co_classidx";
const CO_SYM: &str = "co_sym";
const CO_REP: &str = "co_rep";

/// All symmetry tables, built once and shared read-only by the search.
#[derive(Debug)]
pub struct SymTables {
    pub symmetries: Symmetries,
    /// `twist_conj[twist * N_SYM_D4H + s] = s * twist * s^-1`.
    pub twist_conj: Vec<u16>,
    /// `ud_edges_conj[ud_edges * N_SYM_D4H + s] = s * ud_edges * s^-1`.
    pub ud_edges_conj: Vec<u16>,
    /// Orbit classification of the flip-slice domain.
    pub flipslice: SymClasses,
    /// Orbit classification of the corner permutation domain.
    pub corners: SymClasses,
}

impl SymTables {
    /// Load every table from `dir`, generating and persisting any that is
    /// missing. The group tables themselves are cheap and always rebuilt in
    /// memory. The three files of a classified domain are handled as a
    /// unit: unless all are present, the domain is reclassified and all
    /// three rewritten.
    ///
    /// # Errors
    ///
    /// On any construction inconsistency, cached-file length mismatch or
    /// I/O failure. See [`SymTableError`]; none of these are recoverable.
    pub fn load_or_generate(dir: impl Into<PathBuf>) -> Result<Self, SymTableError> {
        let store = TableStore::new(dir)?;
        let symmetries = Symmetries::new()?;

        let twist_conj = if store.exists(CONJ_TWIST) {
            store.load_u16(CONJ_TWIST, N_TWIST * N_SYM_D4H)?
        } else {
            info!(start!("generating the twist conjugation table"));
            let t0 = Instant::now();
            let table = conjugate::twist_conj_table(&symmetries);
            store.save_u16(CONJ_TWIST, &table)?;
            info!(
                success!("twist conjugation table written in {:.3}s"),
                t0.elapsed().as_secs_f64()
            );
            table
        };

        let ud_edges_conj = if store.exists(CONJ_UD_EDGES) {
            store.load_u16(CONJ_UD_EDGES, N_UD_EDGES * N_SYM_D4H)?
        } else {
            info!(start!("generating the UD-edges conjugation table"));
            let t0 = Instant::now();
            let table = conjugate::ud_edges_conj_table(&symmetries);
            store.save_u16(CONJ_UD_EDGES, &table)?;
            info!(
                success!("UD-edges conjugation table written in {:.3}s"),
                t0.elapsed().as_secs_f64()
            );
            table
        };

        let flipslice =
            if store.exists(FS_CLASSIDX) && store.exists(FS_SYM) && store.exists(FS_REP) {
                SymClasses {
                    classidx: store.load_u16(FS_CLASSIDX, N_SLICE * N_FLIP)?,
                    sym: store.load_u8(FS_SYM, N_SLICE * N_FLIP)?,
                    rep: store.load_u32(FS_REP, N_FLIPSLICE_CLASS)?,
                }
            } else {
                info!(start!("classifying the flip-slice domain"));
                let t0 = Instant::now();
                let classes = classify::flipslice_classes(&symmetries);
                store.save_u16(FS_CLASSIDX, &classes.classidx)?;
                store.save_u8(FS_SYM, &classes.sym)?;
                store.save_u32(FS_REP, &classes.rep)?;
                info!(
                    success!("flip-slice sym-tables written in {:.3}s"),
                    t0.elapsed().as_secs_f64()
                );
                classes
            };

        let corners =
            if store.exists(CO_CLASSIDX) && store.exists(CO_SYM) && store.exists(CO_REP) {
                SymClasses {
                    classidx: store.load_u16(CO_CLASSIDX, N_CORNERS)?,
                    sym: store.load_u8(CO_SYM, N_CORNERS)?,
                    rep: store
                        .load_u16(CO_REP, crate::N_CORNERS_CLASS)?
                        .into_iter()
                        .map(u32::from)
                        .collect(),
                }
            } else {
                info!(start!("classifying the corner permutation domain"));
                let t0 = Instant::now();
                let classes = classify::corner_classes(&symmetries);
                store.save_u16(CO_CLASSIDX, &classes.classidx)?;
                store.save_u8(CO_SYM, &classes.sym)?;
                // Corner representatives index a domain of 40320, so 16 bits
                // suffice on disk.
                let rep_u16: Vec<u16> = classes.rep.iter().map(|&r| r as u16).collect();
                store.save_u16(CO_REP, &rep_u16)?;
                info!(
                    success!("corner sym-tables written in {:.3}s"),
                    t0.elapsed().as_secs_f64()
                );
                classes
            };

        Ok(SymTables {
            symmetries,
            twist_conj,
            ud_edges_conj,
            flipslice,
            corners,
        })
    }
}
