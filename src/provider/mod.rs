use std::fmt;

use serde::Deserialize;

pub mod errors;
pub use errors::Error;

mod http;
pub use http::HttpProvider;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Identifier the remote service uses for one of its categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry in the provider's category listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClueData {
    pub question: String,
    pub answer: String,
}

/// A category's full clue set, before any sampling.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<ClueData>,
}

/// The two operations the game needs from a trivia service. Transport, auth
/// and pagination stay on the implementor's side of this line.
pub trait TriviaProvider {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>>;

    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail>;
}

#[cfg(test)]
mod tests {
    use super::{CategoryDetail, CategoryId, CategorySummary};

    #[test]
    fn listing_entry_ignores_extra_fields() {
        let json = r#"{"id":306,"title":"mixed bag","clues_count":10}"#;

        let summary: CategorySummary =
            serde_json::from_str(json).expect("listing entry should deserialize");

        assert_eq!(summary.id, CategoryId::new(306));
        assert_eq!(summary.title, "mixed bag");
    }

    #[test]
    fn detail_keeps_clues_in_listed_order() {
        let json = r#"{
            "id": 11496,
            "title": "state capitals",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "this city is the capital of Oregon", "answer": "Salem", "value": 200},
                {"id": 2, "question": "this city is the capital of Vermont", "answer": "Montpelier", "value": 400}
            ]
        }"#;

        let detail: CategoryDetail =
            serde_json::from_str(json).expect("detail should deserialize");

        assert_eq!(detail.title, "state capitals");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].answer, "Salem");
        assert_eq!(detail.clues[1].question, "this city is the capital of Vermont");
    }
}
