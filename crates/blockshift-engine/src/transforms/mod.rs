//! # Block Transforms
//!
//! Switching a block from one kind to another.
//!
//! ## Resolution
//!
//! 1. **Gathering** (`gather`): candidate rules are collected in one pass,
//!    `to` rules of the source kind first, then `from` rules of the
//!    destination kind, each list in declared order.
//! 2. **Conversion**: only the first candidate is invoked. Its result is a
//!    [`TransformOutput`] (`Single`, `Sequence` or `Invalid`).
//! 3. **Validation** (`validate`): every output block must be well formed,
//!    registered, and of a kind on one side of the rule. One bad block
//!    rejects the whole output.
//! 4. **Identity**: the first output block of the destination kind takes
//!    over the source block's id.
//!
//! Any failure along the way yields `None`. Callers see "not transformable"
//! and cannot tell which step failed; the reason is logged at debug level.
//!
//! ## Modules
//!
//! - **`gather`**: `candidate_rules` and the `Candidate` it returns
//! - **`output`**: `TransformOutput` tagged result
//! - **`validate`**: output shape and kind checks
//! - **`resolve`**: `switch_to_block_type` and `possible_block_types`

mod gather;
mod output;
mod resolve;
mod validate;

pub use gather::{Candidate, candidate_rules};
pub use output::TransformOutput;
pub use resolve::{possible_block_types, switch_to_block_type};
