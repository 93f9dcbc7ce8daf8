use std::sync::Arc;

use arc_swap::ArcSwapOption;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::provider::TriviaProvider;

use super::{
    board::{Board, Coord},
    loader::{self, LoadError},
    reveal::ActivateError,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a board is already loading")]
    LoadInProgress,

    #[error("no game has been started yet")]
    NotStarted,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Activate(#[from] ActivateError),
}

/// One player's running game.
///
/// The canonical board lives behind a mutex; `snapshot` holds the copy
/// renderers read, swapped in one piece so nobody ever sees a board that is
/// half one game and half another.
pub struct Session<P> {
    provider: P,
    pool_size: usize,
    board: Mutex<Option<Board>>,
    snapshot: ArcSwapOption<Board>,
    load_gate: Mutex<()>,
}

impl<P: TriviaProvider> Session<P> {
    pub fn new(provider: P, pool_size: usize) -> Self {
        Self {
            provider,
            pool_size,
            board: Mutex::new(None),
            snapshot: ArcSwapOption::from(None),
            load_gate: Mutex::new(()),
        }
    }

    /// Loads a fresh board and replaces the previous one, but only once the
    /// new one is fully built. A failed load leaves the old board in place,
    /// so the player can simply try again.
    #[instrument(skip_all)]
    pub async fn start_game(&self) -> Result<Arc<Board>, SessionError> {
        let Ok(_gate) = self.load_gate.try_lock() else {
            warn!("start requested while a load is already in flight");
            return Err(SessionError::LoadInProgress);
        };

        let mut rng = StdRng::from_entropy();
        let board = loader::load_board(&self.provider, self.pool_size, &mut rng).await?;

        let published = Arc::new(board.clone());
        *self.board.lock().await = Some(board);
        self.snapshot.store(Some(published.clone()));

        info!("new game ready");
        Ok(published)
    }

    /// Forwards an activation to the board and republishes the snapshot when
    /// a clue actually changed state.
    pub async fn activate(&self, coord: Coord) -> Result<Option<String>, SessionError> {
        let mut guard = self.board.lock().await;
        let board = guard.as_mut().ok_or(SessionError::NotStarted)?;

        let shown = board.activate(coord)?.map(str::to_owned);
        if shown.is_some() {
            self.snapshot.store(Some(Arc::new(board.clone())));
        }

        Ok(shown)
    }

    /// The latest fully-consistent board, if a game has been loaded. Reads
    /// never wait on an in-flight load.
    pub fn board(&self) -> Option<Arc<Board>> {
        self.snapshot.load_full()
    }
}
