//! Instantiation scopes
//!
//! The mapping engine builds models recursively: constructing an article
//! model may construct an image model, which may construct a link model.
//! [`InjectionTracker`] follows that nesting. Each call to
//! [`InjectionTracker::enter`] pushes a model onto the current chain and
//! returns a guard; dropping the guard records the chain (outermost model
//! first) with the elapsed time, then pops it.
//!
//! ```ignore
//! let tracker = injector.tracker();
//! {
//!     let _article = tracker.enter("ArticleModel");
//!     let _image = tracker.enter("ImageModel");
//! } // records [ArticleModel, ImageModel] then [ArticleModel]
//! ```
//!
//! A tracker is tied to one mapping run and is not `Sync`;
//! create one per thread.

use slice_domain::ports::StatisticsRepositoryInterface;
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

/// Follows nested model instantiations for one repository
pub struct InjectionTracker {
    repository: Arc<dyn StatisticsRepositoryInterface>,
    /// Open models with the token of the scope that opened them
    chain: RefCell<Vec<(u64, String)>>,
    next_token: Cell<u64>,
}

impl InjectionTracker {
    /// Create a tracker recording into `repository`
    pub fn new(repository: Arc<dyn StatisticsRepositoryInterface>) -> Self {
        Self {
            repository,
            chain: RefCell::new(Vec::new()),
            next_token: Cell::new(0),
        }
    }

    /// Start instantiating `model` inside whatever is currently open
    pub fn enter<S: Into<String>>(&self, model: S) -> InjectionScope<'_> {
        let token = self.next_token.get();
        self.next_token.set(token.wrapping_add(1));

        let mut chain = self.chain.borrow_mut();
        chain.push((token, model.into()));
        InjectionScope {
            tracker: self,
            token,
            depth: chain.len(),
            started: Instant::now(),
        }
    }

    /// Models currently being instantiated, outermost first
    pub fn current_chain(&self) -> Vec<String> {
        self.chain
            .borrow()
            .iter()
            .map(|(_, model)| model.clone())
            .collect()
    }

    /// Number of open scopes
    pub fn depth(&self) -> usize {
        self.chain.borrow().len()
    }
}

/// Guard for one model instantiation; records on drop
#[must_use = "the instantiation is recorded when the scope is dropped"]
pub struct InjectionScope<'a> {
    tracker: &'a InjectionTracker,
    token: u64,
    depth: usize,
    started: Instant,
}

impl InjectionScope<'_> {
    /// Nesting level of this scope, starting at 1
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Drop for InjectionScope<'_> {
    fn drop(&mut self) {
        let elapsed = self.started.elapsed();
        let mut chain = self.tracker.chain.borrow_mut();

        // The entry is gone once an enclosing scope has closed
        let owns_entry = chain
            .get(self.depth - 1)
            .is_some_and(|(token, _)| *token == self.token);
        if !owns_entry {
            warn!(
                depth = self.depth,
                open = chain.len(),
                "Injection scope closed after its parent; usage not recorded"
            );
            return;
        }

        // Children still open are abandoned along with this scope
        chain.truncate(self.depth);
        let path: Vec<&str> = chain.iter().map(|(_, model)| model.as_str()).collect();
        self.tracker.repository.record_usage_timed(&path, elapsed);
        chain.truncate(self.depth - 1);
    }
}
