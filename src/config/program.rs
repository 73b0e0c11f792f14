use super::traits::ConfigSection;
use crate::error::BlockseekError;
use crate::types::{Block, BlockProgram};
use serde::{Deserialize, Serialize};

/// The block table the evaluator runs. The default reproduces the shipped
/// 14-block instance; any same-shaped table can be supplied instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    pub blocks: Vec<Block>,
}

impl ProgramConfig {
    pub fn to_program(&self) -> BlockProgram {
        BlockProgram::new(self.blocks.clone())
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            blocks: vec![
                Block::ShiftIn { add2: 12 },
                Block::ShiftIn { add2: 7 },
                Block::ShiftIn { add2: 8 },
                Block::ShiftIn { add2: 8 },
                Block::ShiftIn { add2: 15 },
                Block::Reduce { add1: -16, add2: 12 },
                Block::ShiftIn { add2: 8 },
                Block::Reduce { add1: -11, add2: 13 },
                Block::Reduce { add1: -13, add2: 3 },
                Block::ShiftIn { add2: 13 },
                Block::Reduce { add1: -8, add2: 3 },
                Block::Reduce { add1: -1, add2: 9 },
                Block::Reduce { add1: -4, add2: 4 },
                Block::Reduce { add1: -14, add2: 13 },
            ],
        }
    }
}

impl ConfigSection for ProgramConfig {
    fn section_name() -> &'static str {
        "program"
    }

    fn validate(&self) -> Result<(), BlockseekError> {
        if self.blocks.is_empty() {
            return Err(BlockseekError::InvalidProgram(
                "Block table must not be empty".to_string(),
            ));
        }
        let program = self.to_program();
        if program.min_final_depth() != 0 {
            log::warn!(
                "Block table can never empty the accumulator ({} shift-in vs {} reduce blocks); the search can only exhaust",
                program.shift_in_count(),
                program.reduce_count()
            );
        }
        Ok(())
    }
}
