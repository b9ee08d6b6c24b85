//! Hexword terminal game: you against the computer on a hex board.

use anyhow::Context;
use hexword_core::{Bot, GameState, WordList};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod config;
mod session;

use config::Settings;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;
    info!("Starting Hexword...");

    let dictionary = WordList::load(&settings.dictionary_path).with_context(|| {
        format!(
            "Failed to load dictionary from {}",
            settings.dictionary_path.display()
        )
    })?;
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        settings.dictionary_path.display()
    );

    let (game, bot) = match settings.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            (
                GameState::with_seed(settings.game.clone(), seed),
                Bot::with_seed(seed.wrapping_add(1)),
            )
        }
        None => (GameState::new(settings.game.clone()), Bot::new()),
    };

    let mut session = Session::new(game, bot, dictionary);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let outcome = session.run(stdin.lock(), &mut stdout)?;

    match outcome {
        Some(outcome) => info!("Finished: {}", outcome.message()),
        None => info!("Game abandoned"),
    }
    Ok(())
}
