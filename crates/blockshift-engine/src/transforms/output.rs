use crate::block::Block;

/// What a conversion function hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOutput {
    /// One block.
    Single(Block),
    /// An ordered run of blocks. Empty sequences are rejected.
    Sequence(Vec<Block>),
    /// Nothing usable was produced.
    Invalid,
}

impl TransformOutput {
    /// Flatten into an ordered, non-empty list of blocks.
    pub(crate) fn into_blocks(self) -> Option<Vec<Block>> {
        match self {
            TransformOutput::Single(block) => Some(vec![block]),
            TransformOutput::Sequence(blocks) if !blocks.is_empty() => Some(blocks),
            TransformOutput::Sequence(_) | TransformOutput::Invalid => None,
        }
    }
}

impl From<Block> for TransformOutput {
    fn from(block: Block) -> Self {
        TransformOutput::Single(block)
    }
}

impl From<Vec<Block>> for TransformOutput {
    fn from(blocks: Vec<Block>) -> Self {
        TransformOutput::Sequence(blocks)
    }
}

impl From<Option<Block>> for TransformOutput {
    fn from(block: Option<Block>) -> Self {
        block.map_or(TransformOutput::Invalid, TransformOutput::Single)
    }
}
