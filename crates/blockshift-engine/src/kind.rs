use std::fmt;
use std::sync::Arc;

use crate::attributes::{AttrValue, Attributes};
use crate::block::Block;
use crate::error::BlockError;
use crate::registry::BlockRegistry;
use crate::transforms::TransformOutput;

/// Signature of a transform rule's conversion function.
///
/// The rule receives the block being converted and the registry it was
/// found in, so it can build its output through the factory.
pub type ConvertFn =
    dyn Fn(&Block, &BlockRegistry) -> Result<TransformOutput, BlockError> + Send + Sync;

/// Which side of a conversion a rule is declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Declared on the destination kind: `blocks` lists the kinds that can
    /// be converted *into* it.
    From,
    /// Declared on the source kind: `blocks` lists the kinds it can be
    /// converted *into*.
    To,
}

/// A declared conversion between the kind that owns the rule and a set of
/// kinds on the other side.
#[derive(Clone)]
pub struct TransformRule {
    blocks: Vec<String>,
    convert: Arc<ConvertFn>,
}

impl TransformRule {
    pub fn new<I, S, F>(blocks: I, convert: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Block, &BlockRegistry) -> Result<TransformOutput, BlockError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            blocks: blocks.into_iter().map(Into::into).collect(),
            convert: Arc::new(convert),
        }
    }

    /// Kind names on the other side of the conversion.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.blocks.iter().any(|b| b == name)
    }

    pub fn convert(
        &self,
        block: &Block,
        registry: &BlockRegistry,
    ) -> Result<TransformOutput, BlockError> {
        (self.convert)(block, registry)
    }
}

impl fmt::Debug for TransformRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRule")
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}

/// Transform rules of a kind, split by direction and kept in declared order.
#[derive(Debug, Clone, Default)]
pub struct Transforms {
    pub from: Vec<TransformRule>,
    pub to: Vec<TransformRule>,
}

impl Transforms {
    pub fn rules(&self, direction: Direction) -> &[TransformRule] {
        match direction {
            Direction::From => &self.from,
            Direction::To => &self.to,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_empty() && self.to.is_empty()
    }
}

/// Definition of a block kind: its name, attribute defaults and transforms.
///
/// Built with the `with_*` / `transform_*` methods, then handed to
/// [`BlockRegistry::register`]. Once registered it is not modified.
#[derive(Debug, Clone)]
pub struct BlockKind {
    name: String,
    default_attributes: Attributes,
    transforms: Transforms,
}

impl BlockKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_attributes: Attributes::new(),
            transforms: Transforms::default(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.default_attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_defaults(mut self, defaults: Attributes) -> Self {
        self.default_attributes.extend(defaults);
        self
    }

    /// Declare that blocks of the listed kinds can be converted into this kind.
    pub fn transform_from<I, S, F>(self, blocks: I, convert: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Block, &BlockRegistry) -> Result<TransformOutput, BlockError>
            + Send
            + Sync
            + 'static,
    {
        self.with_rule(Direction::From, TransformRule::new(blocks, convert))
    }

    /// Declare that blocks of this kind can be converted into the listed kinds.
    pub fn transform_to<I, S, F>(self, blocks: I, convert: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Block, &BlockRegistry) -> Result<TransformOutput, BlockError>
            + Send
            + Sync
            + 'static,
    {
        self.with_rule(Direction::To, TransformRule::new(blocks, convert))
    }

    pub fn with_rule(mut self, direction: Direction, rule: TransformRule) -> Self {
        match direction {
            Direction::From => self.transforms.from.push(rule),
            Direction::To => self.transforms.to.push(rule),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_attributes(&self) -> &Attributes {
        &self.default_attributes
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }
}
