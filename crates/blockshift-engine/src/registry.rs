use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::attributes::{AttrValue, Attributes};
use crate::block::Block;
use crate::error::BlockError;
use crate::kind::BlockKind;
use crate::{factory, transforms};

/// Kind names are namespaced: `namespace/name`, lowercase ASCII, digits and dashes.
fn is_valid_kind_name(name: &str) -> bool {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-z0-9-]+/[a-z0-9-]+$").expect("Invalid kind name regex"))
        .is_match(name)
}

/// Owned mapping from kind name to [`BlockKind`].
///
/// One registry is built per host (or per test) and passed to the factory
/// and the transform resolver. Enumeration is ordered by kind name.
#[derive(Debug, Default)]
pub struct BlockRegistry {
    kinds: BTreeMap<String, BlockKind>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a kind definition under its name.
    pub fn register(&mut self, kind: BlockKind) -> Result<(), BlockError> {
        let name = kind.name().to_string();
        if !is_valid_kind_name(&name) {
            return Err(BlockError::InvalidName(name));
        }
        if self.kinds.contains_key(&name) {
            return Err(BlockError::AlreadyRegistered(name));
        }

        log::debug!(
            "registering block kind {name} ({} from, {} to transforms)",
            kind.transforms().from.len(),
            kind.transforms().to.len()
        );
        self.kinds.insert(name, kind);
        Ok(())
    }

    /// Remove a kind, returning its definition.
    pub fn unregister(&mut self, name: &str) -> Result<BlockKind, BlockError> {
        self.kinds
            .remove(name)
            .ok_or_else(|| BlockError::NotRegistered(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&BlockKind> {
        self.kinds.get(name)
    }

    /// Lookup that treats an unknown name as an error.
    pub fn kind(&self, name: &str) -> Result<&BlockKind, BlockError> {
        self.get(name)
            .ok_or_else(|| BlockError::NotRegistered(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// All registered kinds, sorted by name
    pub fn kinds(&self) -> impl Iterator<Item = &BlockKind> {
        self.kinds.values()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Remove every registered kind
    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    /// See [`factory::create_block`].
    pub fn create_block<K, V>(
        &self,
        name: &str,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Block, BlockError>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        factory::create_block(self, name, attributes)
    }

    /// See [`transforms::switch_to_block_type`].
    pub fn switch_to_block_type(&self, block: &Block, name: &str) -> Option<Vec<Block>> {
        transforms::switch_to_block_type(self, block, name)
    }

    /// See [`transforms::possible_block_types`].
    pub fn possible_block_types(&self, block: &Block) -> Vec<&str> {
        transforms::possible_block_types(self, block)
    }

    /// Defaults of a registered kind, or `None` for unknown names.
    pub fn default_attributes(&self, name: &str) -> Option<&Attributes> {
        self.get(name).map(BlockKind::default_attributes)
    }
}
