pub const MATCH_SCORE: isize = 1;
pub const MISMATCH_SCORE: isize = -3;

/// The per-step gap cost charged by global (Needleman-Wunsch) alignment.
pub const GLOBAL_GAP_PENALTY: isize = 2;

/// The per-step gap cost charged by local (Smith-Waterman) alignment.
///
/// This is deliberately a separate constant from [GLOBAL_GAP_PENALTY];
/// the two algorithms charge different gap costs.
pub const LOCAL_GAP_PENALTY: isize = 1;

/// The substitution score for a pair of sequence symbols.
#[inline]
pub fn substitution_score(a: u8, b: u8) -> isize {
    if a == b {
        MATCH_SCORE
    } else {
        MISMATCH_SCORE
    }
}
