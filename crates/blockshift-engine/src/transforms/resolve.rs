use crate::block::{Block, BlockId};
use crate::registry::BlockRegistry;

use super::gather::candidate_rules;
use super::validate::check_output;

/// Switch `block` to kind `name`.
///
/// Returns the blocks produced by the first rule linking the two kinds, or
/// `None` when no rule exists or the rule's output is unusable. The first
/// output block of kind `name` keeps `block`'s id. The others keep the ids
/// they were created with, except copies of `block`'s id, which are replaced
/// with fresh ones.
///
/// A rule that returns `Err` counts as unusable output. A rule that panics
/// is not caught.
pub fn switch_to_block_type(
    registry: &BlockRegistry,
    block: &Block,
    name: &str,
) -> Option<Vec<Block>> {
    let source = block.name();
    let candidates = candidate_rules(registry, source, name);
    let Some(candidate) = candidates.first() else {
        log::debug!("no transform from {source} to {name}");
        return None;
    };

    let output = match candidate.rule.convert(block, registry) {
        Ok(output) => output,
        Err(e) => {
            log::warn!(
                "{:?} transform declared on {} failed converting {source} to {name}: {e}",
                candidate.direction,
                candidate.owner
            );
            return None;
        }
    };

    let Some(mut blocks) = output.into_blocks() else {
        log::debug!("transform from {source} to {name} produced no blocks");
        return None;
    };

    if let Err(rejection) = check_output(registry, candidate, &blocks) {
        log::debug!("rejected transform from {source} to {name}: {rejection}");
        return None;
    }

    let Some(position) = blocks.iter().position(|b| b.name() == name) else {
        log::debug!("transform from {source} to {name} produced no {name} block");
        return None;
    };
    for (index, output) in blocks.iter_mut().enumerate() {
        if index == position {
            output.set_id(block.id());
        } else if output.id() == block.id() {
            // Rules may hand back a clone of the source
            output.set_id(BlockId::new());
        }
    }

    Some(blocks)
}

/// Kinds `block` could be switched to, in registry order.
///
/// Only checks that a rule exists in either direction; rules are not run, so
/// a listed kind may still fail in [`switch_to_block_type`].
pub fn possible_block_types<'a>(registry: &'a BlockRegistry, block: &Block) -> Vec<&'a str> {
    registry
        .kinds()
        .map(|kind| kind.name())
        .filter(|name| *name != block.name())
        .filter(|name| !candidate_rules(registry, block.name(), name).is_empty())
        .collect()
}
