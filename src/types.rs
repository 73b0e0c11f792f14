use serde::{Deserialize, Serialize};

/// Radix of the accumulator's digit stack.
pub const STACK_RADIX: i64 = 26;

/// One arithmetic step of an accumulator program.
///
/// Each block consumes exactly one input digit and rewrites the accumulator,
/// read as a stack of base-26 digits (most recent push in the low position):
/// - `ShiftIn` always pushes `digit + add2`.
/// - `Reduce` always pops the top digit and re-pushes `digit + add2` only
///   when `top + add1` differs from the input digit. When they agree the
///   stack shrinks by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    ShiftIn { add2: i64 },
    Reduce { add1: i64, add2: i64 },
}

/// A fixed chain of blocks evaluated in order against one digit sequence.
///
/// The table is plain data: built once, never mutated at runtime. Position
/// `i` consumes digit `i` of the candidate (most significant digit first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockProgram {
    blocks: Vec<Block>,
}

impl BlockProgram {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Number of blocks, which is also the digit width of a candidate.
    pub fn width(&self) -> usize {
        self.blocks.len()
    }

    pub fn shift_in_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::ShiftIn { .. }))
            .count()
    }

    pub fn reduce_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Reduce { .. }))
            .count()
    }

    /// Minimum reachable stack depth after each block prefix.
    ///
    /// ShiftIn always deepens the stack by one. Reduce leaves the depth
    /// unchanged on a mismatch and shrinks it on a match, so the shallowest
    /// path takes the match branch everywhere, clamped at zero (popping an
    /// empty accumulator keeps it at zero). The profile depends on block
    /// shapes only, never on digit values.
    pub fn min_depth_profile(&self) -> Vec<u32> {
        let mut depth = 0u32;
        self.blocks
            .iter()
            .map(|block| {
                depth = match block {
                    Block::ShiftIn { .. } => depth + 1,
                    Block::Reduce { .. } => depth.saturating_sub(1),
                };
                depth
            })
            .collect()
    }

    /// Shallowest stack depth any input can end on. Nonzero means no digit
    /// sequence can be accepted.
    pub fn min_final_depth(&self) -> u32 {
        self.min_depth_profile().last().copied().unwrap_or(0)
    }
}

/// Terminal state of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The largest candidate the program accepts.
    Found(u64),
    /// The whole range was scanned without an acceptance.
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balanced_table() -> Vec<Block> {
        vec![
            Block::ShiftIn { add2: 3 },
            Block::ShiftIn { add2: 1 },
            Block::Reduce { add1: -1, add2: 5 },
            Block::Reduce { add1: 2, add2: 0 },
        ]
    }

    #[test]
    fn depth_profile_tracks_shapes_only() {
        let program = BlockProgram::new(balanced_table());
        assert_eq!(program.min_depth_profile(), vec![1, 2, 1, 0]);
        assert_eq!(program.min_final_depth(), 0);
    }

    #[test]
    fn unbalanced_table_cannot_empty_the_stack() {
        let mut blocks = balanced_table();
        blocks.push(Block::ShiftIn { add2: 4 });
        let program = BlockProgram::new(blocks);
        assert_eq!(program.min_final_depth(), 1);
    }

    #[test]
    fn reduce_on_empty_stack_clamps_at_zero() {
        let program = BlockProgram::new(vec![
            Block::Reduce { add1: 5, add2: 0 },
            Block::ShiftIn { add2: 0 },
        ]);
        assert_eq!(program.min_depth_profile(), vec![0, 1]);
    }

    #[test]
    fn shape_census() {
        let program = BlockProgram::new(balanced_table());
        assert_eq!(program.shift_in_count(), 2);
        assert_eq!(program.reduce_count(), 2);
    }
}
