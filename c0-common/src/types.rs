//! Identifier types shared across compiler phases

/// IR value identifier (`v<N>` in dumps)
pub type ValueId = u32;

/// IR basic block identifier (`b<N>` in dumps)
pub type BlockId = u32;
