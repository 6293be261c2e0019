use std::path::PathBuf;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use word_grid::{config::Config, Layout, Render};

fn main() -> Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(path.as_deref())?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut rng = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let layout = Layout::generate(&config.layout(), &mut rng)?;

    print!(
        "{}",
        Render::new(layout.board(), config.style).with_placeholder(config.placeholder)
    );

    for (word, reason) in layout.failures() {
        eprintln!("could not place {word:?}: {reason}");
    }

    Ok(())
}
