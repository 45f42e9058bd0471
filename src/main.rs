use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rollbook::console::{Console, Tracker};
use rollbook::db::{DataFile, DEFAULT_DATA_FILE};

#[derive(Parser)]
#[command(name = "rollbook")]
#[command(about = "Track student attendance, exam marks and grades from the console")]
struct Cli {
    /// File the roster is loaded from at startup and saved to
    #[arg(long, env = "ROLLBOOK_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,
}

/// Initialize tracing on stderr; stdout belongs to the interactive menu.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "rollbook=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    tracing::info!("Starting rollbook with data file {}", cli.data_file.display());

    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut tracker = Tracker::new(console, DataFile::new(cli.data_file));
    tracker.run()?;

    Ok(())
}
