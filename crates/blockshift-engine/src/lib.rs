//! # blockshift-engine
//!
//! Typed content blocks and the transforms that switch them between kinds.
//!
//! - A [`BlockKind`] names a kind of block, its default attributes and the
//!   [`TransformRule`]s it declares, either `from` other kinds or `to` them.
//! - A [`BlockRegistry`] owns the registered kinds. Build one per host (or
//!   per test) and pass it around; there is no global registry.
//! - [`create_block`] builds a [`Block`] from a kind's defaults plus caller
//!   attributes.
//! - [`switch_to_block_type`] converts a block to another kind through the
//!   first matching rule, keeping the block's identity on the converted
//!   block.
//!
//! ```
//! use blockshift_engine::{BlockKind, BlockRegistry};
//!
//! let mut registry = BlockRegistry::new();
//! registry.register(BlockKind::new("core/text")).unwrap();
//! registry
//!     .register(BlockKind::new("core/heading").with_default("level", 2).transform_from(
//!         ["core/text"],
//!         |block, registry| {
//!             let content = block.attribute_str("value").unwrap_or_default().to_string();
//!             Ok(registry.create_block("core/heading", [("content", content)])?.into())
//!         },
//!     ))
//!     .unwrap();
//!
//! let text = registry.create_block("core/text", [("value", "Ribs")]).unwrap();
//! let switched = registry.switch_to_block_type(&text, "core/heading").unwrap();
//!
//! assert_eq!(switched[0].id(), text.id());
//! assert_eq!(switched[0].attribute_str("content"), Some("Ribs"));
//! ```

pub mod attributes;
pub mod block;
pub mod error;
pub mod factory;
pub mod kind;
pub mod registry;
pub mod transforms;

// Re-export key types for easier usage
pub use attributes::{AttrValue, Attributes, attributes};
pub use block::{Block, BlockId};
pub use error::BlockError;
pub use factory::create_block;
pub use kind::{BlockKind, ConvertFn, Direction, TransformRule, Transforms};
pub use registry::BlockRegistry;
pub use transforms::{TransformOutput, possible_block_types, switch_to_block_type};
