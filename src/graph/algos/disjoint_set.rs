use crate::error::{Result, SkeinError};
use std::collections::HashMap;

/// Union-find forest over node identifiers
///
/// Parent pointers form trees; union by rank keeps them shallow.
/// `find` follows parent pointers iteratively and is idempotent: all
/// nodes transitively unioned together share one representative.
#[derive(Debug, Default, Clone)]
pub struct DisjointSet {
    parents: HashMap<String, String>,
    ranks: HashMap<String, u32>,
}

impl DisjointSet {
    pub fn new() -> Self {
        DisjointSet::default()
    }

    /// Create a singleton set for `v`; no-op if `v` is already tracked
    pub fn make_set(&mut self, v: &str) {
        if self.parents.contains_key(v) {
            return;
        }
        self.parents.insert(v.to_string(), v.to_string());
        self.ranks.insert(v.to_string(), 0);
    }

    pub fn contains(&self, v: &str) -> bool {
        self.parents.contains_key(v)
    }

    /// Representative of the set containing `v`
    ///
    /// Fails with `NodeNotFound` if `v` was never added via `make_set`.
    pub fn find(&self, v: &str) -> Result<String> {
        let mut current = self
            .parents
            .get(v)
            .ok_or_else(|| SkeinError::node_not_found(v))?;
        loop {
            let parent = &self.parents[current];
            if parent == current {
                return Ok(current.clone());
            }
            current = parent;
        }
    }

    /// Merge the sets containing `u` and `v` by rank
    ///
    /// The lower-rank root is attached under the higher-rank root; the
    /// surviving root's rank grows only when the two ranks were equal.
    /// No-op when `u` and `v` already share a set.
    pub fn union(&mut self, u: &str, v: &str) -> Result<()> {
        let root_u = self.find(u)?;
        let root_v = self.find(v)?;
        if root_u == root_v {
            return Ok(());
        }

        let rank_u = self.ranks[&root_u];
        let rank_v = self.ranks[&root_v];
        if rank_u > rank_v {
            self.parents.insert(root_v, root_u);
        } else if rank_v > rank_u {
            self.parents.insert(root_u, root_v);
        } else {
            self.parents.insert(root_u, root_v.clone());
            self.ranks.insert(root_v, rank_v + 1);
        }
        Ok(())
    }
}
