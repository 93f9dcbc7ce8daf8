use thiserror::Error;
use tracing::trace;

use super::board::{Board, Coord, RevealState};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActivateError {
    #[error("{0} is outside the board")]
    OutOfBounds(Coord),
}

impl Board {
    /// Advances the clue under `coord` one reveal step and returns the text
    /// that should be shown for it, if any.
    ///
    /// This is the only place a clue's reveal state changes. A clue that has
    /// already shown its answer swallows the activation and returns `None`.
    pub fn activate(&mut self, coord: Coord) -> Result<Option<&str>, ActivateError> {
        let clue = self
            .clue_mut(coord)
            .ok_or(ActivateError::OutOfBounds(coord))?;

        let shown = match clue.reveal {
            RevealState::Hidden => {
                clue.reveal = RevealState::Question;
                trace!(%coord, "showing question");
                Some(clue.question())
            }
            RevealState::Question => {
                clue.reveal = RevealState::Answer;
                trace!(%coord, "showing answer");
                Some(clue.answer())
            }
            RevealState::Answer => {
                trace!(%coord, "already answered, ignoring");
                None
            }
        };

        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::{board_of, Board, Category, Clue, Coord, RevealState};

    fn math_board() -> Board {
        let mut categories = vec![Category::new(
            "Math",
            vec![
                Clue::new("2+2", "4"),
                Clue::new("3*3", "9"),
                Clue::new("10/2", "5"),
                Clue::new("7-4", "3"),
                Clue::new("2^5", "32"),
            ],
        )];
        categories.extend(
            board_of(["x", "a", "b", "c", "d", "e"])
                .categories()
                .iter()
                .skip(1)
                .cloned(),
        );

        Board::new(categories)
    }

    #[test]
    fn first_activation_shows_the_question() {
        let mut board = math_board();
        let coord = Coord::new(0, 0);

        let shown = board.activate(coord).expect("coord is on the board");

        assert_eq!(shown, Some("2+2"));
        assert_eq!(
            board.clue(coord).expect("still there").reveal(),
            RevealState::Question
        );
    }

    #[test]
    fn second_activation_shows_the_answer() {
        let mut board = math_board();
        let coord = Coord::new(0, 0);

        board.activate(coord).expect("first activation");
        let shown = board.activate(coord).expect("second activation");

        assert_eq!(shown, Some("4"));
        assert_eq!(
            board.clue(coord).expect("still there").reveal(),
            RevealState::Answer
        );
    }

    #[test]
    fn answered_clue_swallows_further_activations() {
        let mut board = math_board();
        let coord = Coord::new(0, 0);

        board.activate(coord).expect("question");
        board.activate(coord).expect("answer");

        for _ in 0..3 {
            let shown = board.activate(coord).expect("coord is still valid");
            assert_eq!(shown, None);
            assert_eq!(
                board.clue(coord).expect("still there").reveal(),
                RevealState::Answer
            );
        }
    }

    #[test]
    fn states_only_move_forward() {
        let mut board = math_board();
        let coord = Coord::new(3, 2);

        let mut seen = vec![board.clue(coord).expect("valid").reveal()];
        for _ in 0..4 {
            board.activate(coord).expect("valid coord");
            seen.push(board.clue(coord).expect("valid").reveal());
        }

        pretty_assertions::assert_eq!(
            seen,
            vec![
                RevealState::Hidden,
                RevealState::Question,
                RevealState::Answer,
                RevealState::Answer,
                RevealState::Answer,
            ]
        );
    }

    #[test]
    fn out_of_bounds_activation_changes_nothing() {
        let mut board = math_board();
        let before = board.clone();

        let err = board
            .activate(Coord::new(10, 0))
            .expect_err("category 10 does not exist");

        assert_eq!(err.to_string(), "category 10, clue 0 is outside the board");
        assert_eq!(board, before, "a bad coordinate should not touch the board");
    }
}
