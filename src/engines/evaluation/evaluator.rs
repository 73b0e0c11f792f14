use crate::types::{Block, BlockProgram, STACK_RADIX};

/// Runs a block program against candidate digit sequences.
///
/// The accumulator is one `i64` holding a stack of base-26 digits, with the
/// most recent push in the least significant position. A ShiftIn block
/// multiplies by 26 and adds; a Reduce block divides by 26 (the provisional
/// pop) and re-pushes only when its predicate mismatches. A candidate is
/// accepted when the stack is empty (`z == 0`) after the final block.
///
/// Evaluation is a pure arithmetic transform: no failure modes, no side
/// effects, no state carried between calls. With digits in [1,9] and the
/// shipped table, `|z|` stays below 26^7, nowhere near `i64` range.
pub struct BlockEvaluator {
    program: BlockProgram,
}

impl BlockEvaluator {
    pub fn new(program: BlockProgram) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &BlockProgram {
        &self.program
    }

    /// True iff the accumulator lands on zero after the final block.
    pub fn accepts(&self, digits: &[u8]) -> bool {
        self.final_accumulator(digits) == 0
    }

    /// Threads one digit sequence through every block and returns the raw
    /// accumulator. Digit count must match the program width; the caller
    /// enforces this.
    pub fn final_accumulator(&self, digits: &[u8]) -> i64 {
        debug_assert_eq!(digits.len(), self.program.width());

        let mut z: i64 = 0;
        for (block, &digit) in self.program.blocks().iter().zip(digits) {
            let d = i64::from(digit);
            match *block {
                Block::ShiftIn { add2 } => {
                    z = STACK_RADIX * z + (d + add2);
                }
                Block::Reduce { add1, add2 } => {
                    let top = z % STACK_RADIX;
                    let mismatch = top + add1 != d;
                    z /= STACK_RADIX;
                    if mismatch {
                        z = STACK_RADIX * z + (d + add2);
                    }
                }
            }
        }
        z
    }
}
