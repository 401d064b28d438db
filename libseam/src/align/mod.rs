pub mod structs;

mod scoring;
pub use scoring::{
    substitution_score, GLOBAL_GAP_PENALTY, LOCAL_GAP_PENALTY, MATCH_SCORE, MISMATCH_SCORE,
};

mod global;
pub use global::{build_global_matrix, global_align};

mod local;
pub use local::{build_local_matrix, local_align};

mod traceback;
pub use traceback::{traceback_global, traceback_local};
