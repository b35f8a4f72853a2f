//! Model usage tree
//!
//! Every injector keeps one tree of [`ModelUsageData`] nodes. The root is a
//! synthetic node without a meaningful count; each child stands for a model
//! type instantiated through the injector, and its own children for the
//! models instantiated while building it.
//!
//! ```text
//! <root>
//! ├── ArticleModel (count 3)
//! │   └── ImageModel (count 3)
//! └── LinkModel (count 1)
//! ```

use crate::constants::USAGE_ROOT_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A node of a model usage tree
///
/// Cloning yields a deep, independent copy, which is what statistics
/// snapshots hand out to readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUsageData {
    name: String,
    count: u64,
    total_time: Duration,
    sub_models: BTreeMap<String, ModelUsageData>,
}

impl ModelUsageData {
    /// Empty synthetic root
    pub fn root() -> Self {
        Self::named(USAGE_ROOT_LABEL)
    }

    fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Model type identifier (empty for the root)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of times this model was instantiated under its parent
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Accumulated instantiation time
    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Mean instantiation time, zero if the node was never counted
    pub fn average_time(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total_time.as_nanos() / u128::from(self.count);
        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    /// Sub models keyed (and ordered) by model identifier
    pub fn sub_models(&self) -> &BTreeMap<String, ModelUsageData> {
        &self.sub_models
    }

    /// Look up a direct sub model
    pub fn sub_model(&self, name: &str) -> Option<&ModelUsageData> {
        self.sub_models.get(name)
    }

    /// A node with no sub models; for a root this means nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.sub_models.is_empty()
    }

    /// Sum of the counts of every node below this one
    pub fn total_usages(&self) -> u64 {
        self.sub_models
            .values()
            .map(|child| child.count + child.total_usages())
            .sum()
    }

    /// Sub model for `name`, created on first observation
    pub fn child_mut_or_insert(&mut self, name: &str) -> &mut ModelUsageData {
        self.sub_models
            .entry(name.to_string())
            .or_insert_with(|| Self::named(name))
    }

    /// Attribute one instantiation to the deepest model of `path`
    ///
    /// `path` lists model identifiers from the outermost model to the
    /// innermost. Missing nodes are created on the way down; only the last
    /// node is counted. Returns `false` (and changes nothing) for an empty path.
    pub fn record<S: AsRef<str>>(&mut self, path: &[S], elapsed: Duration) -> bool {
        if path.is_empty() {
            return false;
        }
        let leaf = path
            .iter()
            .fold(self, |node, model| node.child_mut_or_insert(model.as_ref()));
        leaf.count += 1;
        leaf.total_time += elapsed;
        true
    }
}
