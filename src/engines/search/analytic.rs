//! Closed-form search for balanced block programs.
//!
//! Acceptance needs the stack empty after the final block. In a balanced,
//! well-nested table every Reduce pops the digit some earlier ShiftIn
//! pushed, so the stack can only reach zero if every Reduce takes its match
//! branch. Matching pins the paired digits together:
//!
//!   top = d_i + add2_i          (what ShiftIn i pushed)
//!   d_j = top + add1_j          (Reduce j's match predicate)
//!       = d_i + (add2_i + add1_j)
//!
//! The pairs are disjoint, so maximizing each pair independently inside
//! [1,9] yields the largest accepted candidate without visiting the range
//! at all.

use crate::engines::search::candidate::recompose;
use crate::error::{BlockseekError, Result};
use crate::types::{Block, BlockProgram};

/// Largest candidate the program accepts, or `None` when some pair admits
/// no digits in [1,9] (so the exhaustive scan would exhaust too).
///
/// Programs that are not well-nested and balanced fall outside the pairing
/// argument and are rejected; callers fall back to [`SearchEngine`].
///
/// [`SearchEngine`]: crate::engines::search::SearchEngine
pub fn solve_largest(program: &BlockProgram) -> Result<Option<u64>> {
    let mut open: Vec<(usize, i64)> = Vec::new();
    let mut digits = vec![0u8; program.width()];

    for (j, block) in program.blocks().iter().enumerate() {
        match *block {
            Block::ShiftIn { add2 } => open.push((j, add2)),
            Block::Reduce { add1, .. } => {
                let (i, add2) = open.pop().ok_or_else(|| {
                    BlockseekError::Solver(format!(
                        "Reduce block {} has no shift-in block to pair with",
                        j
                    ))
                })?;
                let delta = add2 + add1;
                let d_i = 9i64.min(9 - delta);
                let d_j = d_i + delta;
                if !(1..=9).contains(&d_i) || !(1..=9).contains(&d_j) {
                    return Ok(None);
                }
                digits[i] = d_i as u8;
                digits[j] = d_j as u8;
            }
        }
    }

    if !open.is_empty() {
        return Err(BlockseekError::Solver(format!(
            "Program is not balanced: {} shift-in blocks are never reduced",
            open.len()
        )));
    }

    Ok(Some(recompose(&digits)))
}
