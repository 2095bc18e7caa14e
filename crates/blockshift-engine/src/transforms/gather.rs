use crate::kind::{Direction, TransformRule};
use crate::registry::BlockRegistry;

/// A rule that could convert `source` into `destination`.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub rule: &'a TransformRule,
    pub direction: Direction,
    /// Name of the kind that declares the rule (the source for `To`, the
    /// destination for `From`).
    pub owner: &'a str,
}

impl Candidate<'_> {
    /// Whether `name` sits on either side of this rule.
    pub fn covers(&self, name: &str) -> bool {
        self.owner == name || self.rule.accepts(name)
    }
}

/// Collect every rule linking `source` to `destination`.
///
/// Order is fixed: the source kind's `to` rules naming `destination`, then
/// the destination kind's `from` rules naming `source`, each in declared
/// order. Unregistered kinds contribute nothing.
pub fn candidate_rules<'a>(
    registry: &'a BlockRegistry,
    source: &str,
    destination: &str,
) -> Vec<Candidate<'a>> {
    let outgoing = registry.get(source).into_iter().flat_map(move |kind| {
        kind.transforms()
            .rules(Direction::To)
            .iter()
            .filter(move |rule| rule.accepts(destination))
            .map(move |rule| Candidate {
                rule,
                direction: Direction::To,
                owner: kind.name(),
            })
    });

    let incoming = registry.get(destination).into_iter().flat_map(move |kind| {
        kind.transforms()
            .rules(Direction::From)
            .iter()
            .filter(move |rule| rule.accepts(source))
            .map(move |rule| Candidate {
                rule,
                direction: Direction::From,
                owner: kind.name(),
            })
    });

    outgoing.chain(incoming).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::BlockKind;
    use crate::transforms::TransformOutput;
    use crate::{Block, BlockError};

    fn invalid(_: &Block, _: &BlockRegistry) -> Result<TransformOutput, BlockError> {
        Ok(TransformOutput::Invalid)
    }

    #[test]
    fn test_to_rules_come_before_from_rules() {
        let mut registry = BlockRegistry::new();
        registry
            .register(
                BlockKind::new("core/quote")
                    .transform_from(["core/text"], invalid)
                    .transform_from(["core/list", "core/text"], invalid),
            )
            .unwrap();
        registry
            .register(
                BlockKind::new("core/text")
                    .transform_to(["core/heading"], invalid)
                    .transform_to(["core/quote"], invalid),
            )
            .unwrap();

        let candidates = candidate_rules(&registry, "core/text", "core/quote");

        let summary: Vec<_> = candidates
            .iter()
            .map(|c| (c.direction, c.owner, c.rule.blocks().len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Direction::To, "core/text", 1),
                (Direction::From, "core/quote", 1),
                (Direction::From, "core/quote", 2),
            ]
        );
    }

    #[test]
    fn test_no_candidates_between_unrelated_kinds() {
        let mut registry = BlockRegistry::new();
        registry
            .register(BlockKind::new("core/text").transform_to(["core/heading"], invalid))
            .unwrap();
        registry.register(BlockKind::new("core/quote")).unwrap();

        assert!(candidate_rules(&registry, "core/text", "core/quote").is_empty());
    }

    #[test]
    fn test_unregistered_source_still_finds_from_rules() {
        let mut registry = BlockRegistry::new();
        registry
            .register(BlockKind::new("core/quote").transform_from(["legacy/text"], invalid))
            .unwrap();

        let candidates = candidate_rules(&registry, "legacy/text", "core/quote");

        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].covers("legacy/text"));
        assert!(candidates[0].covers("core/quote"));
        assert!(!candidates[0].covers("core/list"));
    }
}
