use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use tokio::sync::Notify;

use crate::provider::{
    self, CategoryDetail, CategoryId, CategorySummary, ClueData, TriviaProvider,
};

/// In-memory provider for loader and session tests. Category `id` gets the
/// title `category {id}` and clues `question {id}-{n}` / `answer {id}-{n}`.
pub(crate) struct FakeProvider {
    pool: usize,
    clues_per_category: usize,
    short_category: Option<u64>,
    failing: AtomicBool,
    gate: Option<(Arc<Notify>, Arc<Notify>)>,
    detail_calls: Mutex<Vec<CategoryId>>,
}

impl FakeProvider {
    pub fn new(pool: usize, clues_per_category: usize) -> Self {
        Self {
            pool,
            clues_per_category,
            short_category: None,
            failing: AtomicBool::new(false),
            gate: None,
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    /// The category with this id only ever offers 2 clues.
    pub fn with_short_category(mut self, id: u64) -> Self {
        self.short_category = Some(id);
        self
    }

    /// Makes `list_categories` announce itself on `entered`, then block
    /// until `release` fires. Lets a test hold a load mid-flight.
    pub fn gated(mut self, entered: Arc<Notify>, release: Arc<Notify>) -> Self {
        self.gate = Some((entered, release));
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Which categories were fetched, in call order.
    pub fn detail_calls(&self) -> Vec<CategoryId> {
        self.detail_calls
            .lock()
            .expect("detail call log should not be poisoned")
            .clone()
    }

    pub fn title_for(id: CategoryId) -> String {
        format!("category {id}")
    }
}

impl TriviaProvider for FakeProvider {
    async fn list_categories(&self, count: usize) -> provider::Result<Vec<CategorySummary>> {
        if let Some((entered, release)) = &self.gate {
            entered.notify_one();
            release.notified().await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(provider::Error::Status(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }

        Ok((0..self.pool.min(count) as u64)
            .map(|id| {
                let id = CategoryId::new(id);
                CategorySummary {
                    id,
                    title: Self::title_for(id),
                }
            })
            .collect())
    }

    async fn category_detail(&self, id: CategoryId) -> provider::Result<CategoryDetail> {
        self.detail_calls
            .lock()
            .expect("detail call log should not be poisoned")
            .push(id);

        let clues = if self.short_category == Some(id.get()) {
            2
        } else {
            self.clues_per_category
        };

        Ok(CategoryDetail {
            title: Self::title_for(id),
            clues: (0..clues)
                .map(|n| ClueData {
                    question: format!("question {id}-{n}"),
                    answer: format!("answer {id}-{n}"),
                })
                .collect(),
        })
    }
}
