//! Display names for every clade.

use crate::model::{Clade, CladeIndex, PhyloTree};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Prefix of synthetic names; the counter value is appended.
pub const SYNTHETIC_NAME_PREFIX: &str = "internal_";

/// Assigns deterministic synthetic names (`internal_1`, `internal_2`, ...)
/// to unnamed clades.
///
/// The counter is owned by the resolver, so each layout run starts at 1
/// and independent runs never share state.
#[derive(Debug, Default)]
pub struct NameResolver {
    assigned: usize,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name of the clade, first assigning the next synthetic
    /// name if it has none. Calling it again on the same clade returns the
    /// same name without touching the counter.
    pub fn resolve_name<'a>(&mut self, clade: &'a mut Clade) -> &'a str {
        if clade.name().is_none() {
            self.assigned += 1;
            clade.set_name(format!("{SYNTHETIC_NAME_PREFIX}{}", self.assigned));
        }
        clade.name().unwrap_or_default()
    }

    /// Names every clade reachable from the root in level order.
    ///
    /// Duplicate names are kept as they are; each repeated occurrence is
    /// reported with a warning.
    pub fn name_all(&mut self, tree: &mut PhyloTree) {
        let order: Vec<CladeIndex> = tree.level_order_iter().map(Clade::index).collect();
        let before = self.assigned;

        let mut seen = HashSet::with_capacity(order.len());
        for index in order {
            let name = self.resolve_name(&mut tree[index]);
            if !seen.insert(name.to_string()) {
                warn!(clade = index, label = %name, "duplicate clade name");
            }
        }

        debug!(synthetic = self.assigned - before, "named clades");
    }

    /// Returns the number of synthetic names handed out so far.
    pub fn assigned(&self) -> usize {
        self.assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newick::parse_str;

    #[test]
    fn test_resolve_name_is_idempotent() {
        let mut resolver = NameResolver::new();
        let mut clade = Clade::new(0, None, None);
        assert_eq!(resolver.resolve_name(&mut clade), "internal_1");
        assert_eq!(resolver.resolve_name(&mut clade), "internal_1");
        assert_eq!(resolver.assigned(), 1);

        let mut named = Clade::new(1, Some("Kea".to_string()), None);
        assert_eq!(resolver.resolve_name(&mut named), "Kea");
        assert_eq!(resolver.assigned(), 1);
    }

    #[test]
    fn test_name_all_in_level_order() {
        let mut tree = parse_str("((A,B),(C,(D,E)));").unwrap();
        let mut resolver = NameResolver::new();
        resolver.name_all(&mut tree);

        let names: Vec<&str> = tree.level_order_iter().filter_map(Clade::name).collect();
        assert_eq!(
            names,
            vec!["internal_1", "internal_2", "internal_3", "A", "B", "C", "internal_4", "D", "E"]
        );
        assert_eq!(resolver.assigned(), 4);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut first = parse_str("(A,(B,C));").unwrap();
        let mut second = first.clone();
        NameResolver::new().name_all(&mut first);
        NameResolver::new().name_all(&mut second);
        assert_eq!(first.root().name(), Some("internal_1"));
        assert_eq!(second.root().name(), Some("internal_1"));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut tree = parse_str("(A,A,(B)A);").unwrap();
        NameResolver::new().name_all(&mut tree);
        assert_eq!(tree.terminals().filter(|c| c.is_named("A")).count(), 2);
        assert_eq!(tree.pre_order_iter().filter(|c| c.is_named("A")).count(), 3);
    }
}
