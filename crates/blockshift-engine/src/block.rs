use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttrValue, Attributes};

/// Identity token for a block instance.
///
/// Freshly generated ids are random (UUID v4) and never reused within a
/// process. A transform hands the source block's id over to the first
/// output block of the requested kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BlockId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A concrete unit of content: an identity, the name of its kind and its
/// attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    name: String,
    attributes: Attributes,
}

impl Block {
    /// Rebuild a block from its parts, keeping the given identity.
    ///
    /// New blocks should come from [`crate::BlockRegistry::create_block`] so
    /// kind defaults are applied; this is for hosts that already hold block
    /// data (loaded documents, blocks produced by other layers).
    pub fn from_parts(id: BlockId, name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            id,
            name: name.into(),
            attributes,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Name of the block kind this instance belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Shorthand for string attributes, the common case in transform bodies.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(AttrValue::as_str)
    }

    /// A block is well formed when it names a kind at all.
    pub fn is_well_formed(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn into_attributes(self) -> Attributes {
        self.attributes
    }

    pub(crate) fn set_id(&mut self, id: BlockId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::attributes;

    #[test]
    fn test_generated_ids_are_unique() {
        let ids: std::collections::HashSet<BlockId> = (0..100).map(|_| BlockId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_from_parts_keeps_identity() {
        let id = BlockId::new();
        let block = Block::from_parts(id, "core/text", attributes([("value", "ribs")]));

        assert_eq!(block.id(), id);
        assert_eq!(block.name(), "core/text");
        assert_eq!(block.attribute_str("value"), Some("ribs"));
        assert!(block.is_well_formed());
    }

    #[test]
    fn test_nameless_block_is_not_well_formed() {
        let block = Block::from_parts(BlockId::new(), "", Attributes::new());
        assert!(!block.is_well_formed());
    }
}
