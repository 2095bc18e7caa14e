use crate::attributes::{AttrValue, attributes};
use crate::block::{Block, BlockId};
use crate::error::BlockError;
use crate::registry::BlockRegistry;

/// Create a new block of kind `name`.
///
/// The block's attributes start as a copy of the kind's defaults; every key
/// in `input` is then written over them, including keys the kind does
/// not declare. The block gets a fresh [`BlockId`].
///
/// Fails with [`BlockError::NotRegistered`] when `name` is unknown.
pub fn create_block<K, V>(
    registry: &BlockRegistry,
    name: &str,
    input: impl IntoIterator<Item = (K, V)>,
) -> Result<Block, BlockError>
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    let kind = registry.kind(name)?;

    let mut merged = kind.default_attributes().clone();
    merged.extend(attributes(input));

    Ok(Block::from_parts(BlockId::new(), kind.name(), merged))
}
