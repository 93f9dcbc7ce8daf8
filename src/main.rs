#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod errors;

mod framework;
use framework::Config;

mod game;
use game::{
    board::{Board, Coord, RevealState},
    session::{Session, SessionError},
};

mod provider;
use provider::{HttpProvider, TriviaProvider};

use errors::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::load()?;

    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}");
    }

    let provider = HttpProvider::new(&config.provider);
    let session = Session::new(provider, config.provider.category_pool_size());

    play(&session).await
}

const HELP: &str = "commands: new | <category> <clue> | quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    New,
    Activate(Coord),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();

    match words.next()? {
        "new" | "start" => Some(Command::New),
        "quit" | "exit" => Some(Command::Quit),
        first => {
            let category = first.parse().ok()?;
            let clue = words.next()?.parse().ok()?;
            Some(Command::Activate(Coord::new(category, clue)))
        }
    }
}

/// Line-oriented stand-in for a real front end: renders the grid, maps each
/// input back to a cell coordinate, and keeps going when a load fails so the
/// player can retry.
async fn play<P: TriviaProvider>(session: &Session<P>) -> Result<(), Error> {
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Some(Command::New) => match session.start_game().await {
                Ok(board) => render(&board),
                Err(err) => {
                    warn!("{err}");
                    println!("loading failed, type `new` to retry");
                }
            },
            Some(Command::Activate(coord)) => match session.activate(coord).await {
                Ok(Some(text)) => {
                    println!("{text}");
                    if let Some(board) = session.board() {
                        render(&board);
                    }
                }
                Ok(None) => {}
                Err(SessionError::NotStarted) => println!("type `new` to start a game"),
                // bad coordinates are a rendering bug, not the player's problem
                Err(err) => warn!("{err}"),
            },
            Some(Command::Quit) => break,
            None => println!("{HELP}"),
        }
    }

    Ok(())
}

fn render(board: &Board) {
    for (index, category) in board.categories().iter().enumerate() {
        let cells: String = category
            .clues()
            .iter()
            .map(|clue| match clue.reveal() {
                RevealState::Hidden => " # ",
                RevealState::Question => " ? ",
                RevealState::Answer => " . ",
            })
            .collect();

        println!("{index}: [{cells}] {title}", title = category.title());
    }
}
