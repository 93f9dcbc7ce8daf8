use rand::Rng;
use tracing::{debug, info, instrument};

use crate::provider::{self, CategoryId, TriviaProvider};

use super::{
    board::{Board, Category, Clue, CATEGORY_COUNT, CLUES_PER_CATEGORY},
    sampler::{self, NotEnoughItems},
};

/// How many categories to ask the provider for before sampling a board's
/// worth out of them.
pub const DEFAULT_CATEGORY_POOL: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("trivia provider is unavailable: {0}")]
    Provider(#[from] provider::Error),

    #[error("provider listed {available} categories, but a board needs {needed}")]
    NotEnoughCategories { needed: usize, available: usize },

    #[error("category {title:?} only has {available} clues, a column needs {needed}")]
    NotEnoughClues {
        title: String,
        needed: usize,
        available: usize,
    },
}

/// Builds a complete board or fails without leaving anything half-filled
/// behind: every error aborts the whole load.
#[instrument(skip(provider, rng))]
pub async fn load_board<P, R>(provider: &P, pool_size: usize, rng: &mut R) -> Result<Board, LoadError>
where
    P: TriviaProvider,
    R: Rng,
{
    let ids = load_category_ids(provider, pool_size, rng).await?;

    let mut categories = Vec::with_capacity(CATEGORY_COUNT);
    for id in ids {
        categories.push(load_category(provider, id, rng).await?);
    }

    info!("board assembled");
    Ok(Board::new(categories))
}

/// Asks the provider for a pool of categories and samples a board's worth of
/// distinct ids out of it.
pub async fn load_category_ids<P, R>(
    provider: &P,
    pool_size: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>, LoadError>
where
    P: TriviaProvider,
    R: Rng,
{
    let pool = provider.list_categories(pool_size).await?;
    debug!(listed = pool.len(), "fetched category pool");

    let sampled = sampler::sample(pool, CATEGORY_COUNT, rng).map_err(
        |NotEnoughItems {
             requested,
             available,
         }| LoadError::NotEnoughCategories {
            needed: requested,
            available,
        },
    )?;

    Ok(sampled.into_iter().map(|summary| summary.id).collect())
}

/// Fetches one category's clue set and samples it down to a column. A
/// category that cannot fill its column is an error, never padded.
pub async fn load_category<P, R>(
    provider: &P,
    id: CategoryId,
    rng: &mut R,
) -> Result<Category, LoadError>
where
    P: TriviaProvider,
    R: Rng,
{
    let provider::CategoryDetail { title, clues } = provider.category_detail(id).await?;

    let sampled = sampler::sample(clues, CLUES_PER_CATEGORY, rng).map_err(
        |NotEnoughItems {
             requested,
             available,
         }| LoadError::NotEnoughClues {
            title: title.clone(),
            needed: requested,
            available,
        },
    )?;

    debug!(%id, title, "category loaded");

    let clues = sampled
        .into_iter()
        .map(|clue| Clue::new(clue.question, clue.answer))
        .collect();

    Ok(Category::new(title, clues))
}
