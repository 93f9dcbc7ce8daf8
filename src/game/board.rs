use std::fmt;

pub const CATEGORY_COUNT: usize = 6;
pub const CLUES_PER_CATEGORY: usize = 5;

/// How much of a clue the player has uncovered so far.
///
/// Only ever advances `Hidden` → `Question` → `Answer`; there is no way back
/// within a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    pub(super) reveal: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub const fn reveal(&self) -> RevealState {
        self.reveal
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        assert!(
            clues.len() == CLUES_PER_CATEGORY,
            "a category should hold exactly {CLUES_PER_CATEGORY} clues"
        );

        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// A cell address on the board, carried explicitly by whatever renders the
/// grid. Activation validates it before touching any clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub category: usize,
    pub clue: usize,
}

impl Coord {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category {}, clue {}", self.category, self.clue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        assert!(
            categories.len() == CATEGORY_COUNT,
            "a board should hold exactly {CATEGORY_COUNT} categories"
        );

        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn clue(&self, coord: Coord) -> Option<&Clue> {
        self.categories.get(coord.category)?.clues.get(coord.clue)
    }

    pub(super) fn clue_mut(&mut self, coord: Coord) -> Option<&mut Clue> {
        self.categories
            .get_mut(coord.category)?
            .clues
            .get_mut(coord.clue)
    }
}

#[cfg(test)]
pub(super) fn board_of(titles: [&str; CATEGORY_COUNT]) -> Board {
    let categories = titles
        .iter()
        .map(|title| {
            let clues = (0..CLUES_PER_CATEGORY)
                .map(|n| Clue::new(format!("{title} question {n}"), format!("{title} answer {n}")))
                .collect();
            Category::new(*title, clues)
        })
        .collect();

    Board::new(categories)
}
