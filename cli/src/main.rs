use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;

use simon_cli::{TerminalDisplay, ToneAudio, input, logging};
use simon_core::{AudioSurface, GameConfig, GameController, NullAudio};

#[derive(Parser)]
#[command(version, about = "Simon memory game for the terminal")]
struct Cli {
    /// Playback interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Seed the sequence generator for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Disable sound
    #[arg(long)]
    no_audio: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let mut config = GameConfig::load();
    if let Some(interval_ms) = cli.interval_ms {
        config.interval_ms = interval_ms;
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let audio: Box<dyn AudioSurface> = if cli.no_audio || !config.audio_enabled {
        Box::new(NullAudio)
    } else {
        Box::new(ToneAudio)
    };

    // The display takes over the terminal; its Drop gives it back.
    let display = TerminalDisplay::new()?;

    let (input_tx, input_rx) = mpsc::channel(32);
    let reader = tokio::task::spawn_blocking(move || input::read_events(input_tx));

    GameController::new(config, Box::new(display), audio, rng, input_rx)
        .run()
        .await;

    let _ = reader.await;
    Ok(())
}
