//! Search-as-you-type over the catalog.
//!
//! Keystrokes arrive faster than anyone reads results, so filtering runs only once the
//! input has been quiet for the debounce window. Results are published on a watch
//! channel as the ids of matching products.

use super::{Catalog, CategoryFilter};
use crate::framework::Debouncer;
use crate::model::ItemId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

pub struct DebouncedSearch {
    catalog: Arc<Catalog>,
    debouncer: Debouncer,
    results: Arc<watch::Sender<Vec<ItemId>>>,
    category: CategoryFilter,
}

impl DebouncedSearch {
    /// Starts with every product listed.
    pub fn new(catalog: Arc<Catalog>, wait: Duration) -> Self {
        let all = catalog.products().iter().map(|p| p.id).collect();
        let (results, _) = watch::channel(all);
        Self {
            catalog,
            debouncer: Debouncer::new(wait),
            results: Arc::new(results),
            category: CategoryFilter::All,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ItemId>> {
        self.results.subscribe()
    }

    pub fn current(&self) -> Vec<ItemId> {
        self.results.borrow().clone()
    }

    /// Record a keystroke. Supersedes any search still waiting.
    pub fn input(&mut self, term: impl Into<String>) {
        let term = term.into();
        let catalog = self.catalog.clone();
        let results = self.results.clone();
        let category = self.category;
        self.debouncer.call(async move {
            publish(&catalog, &results, &term, category);
        });
    }

    /// Change the category. Applies immediately with `term`, and cancels a waiting
    /// keystroke search since `term` is the newer input.
    pub fn set_category(&mut self, term: &str, category: CategoryFilter) {
        self.category = category;
        self.debouncer.cancel();
        publish(&self.catalog, &self.results, term, category);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

fn publish(
    catalog: &Catalog,
    results: &watch::Sender<Vec<ItemId>>,
    term: &str,
    category: CategoryFilter,
) {
    let ids: Vec<ItemId> = catalog.filter(term, category).map(|p| p.id).collect();
    debug!(term, ?category, matches = ids.len(), "Search");
    results.send_replace(ids);
}
