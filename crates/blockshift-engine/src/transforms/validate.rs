use crate::block::Block;
use crate::registry::BlockRegistry;

use super::gather::Candidate;

/// Why a conversion's output was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// A block with no kind name.
    Malformed { index: usize },
    /// A block whose kind is not registered.
    Unregistered { index: usize, name: String },
    /// A registered kind the rule never declared.
    Undeclared { index: usize, name: String },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Malformed { index } => write!(f, "block {index} has no kind name"),
            Rejection::Unregistered { index, name } => {
                write!(f, "block {index} is of unregistered kind {name}")
            }
            Rejection::Undeclared { index, name } => {
                write!(f, "block {index} is of kind {name}, which the rule does not declare")
            }
        }
    }
}

/// Check every output block against the rule that produced it.
///
/// Stops at the first offending block; the whole output is rejected.
pub(crate) fn check_output(
    registry: &BlockRegistry,
    candidate: &Candidate<'_>,
    blocks: &[Block],
) -> Result<(), Rejection> {
    for (index, block) in blocks.iter().enumerate() {
        if !block.is_well_formed() {
            return Err(Rejection::Malformed { index });
        }
        let name = block.name();
        if !registry.contains(name) {
            return Err(Rejection::Unregistered {
                index,
                name: name.to_string(),
            });
        }
        if !candidate.covers(name) {
            return Err(Rejection::Undeclared {
                index,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
