use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use showcase_wm::desktop::Desktop;
use showcase_wm::drivers::OutputDriver;
use showcase_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use showcase_wm::error::AppError;
use showcase_wm::layout::{CellMetrics, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, MAX_CELL_SIZE};
use showcase_wm::log_buffer::LogBuffer;
use showcase_wm::photos::PhotoLibrary;
use showcase_wm::runner::run_desktop;
use showcase_wm::term_color::ColorSupport;
use showcase_wm::theme::Theme;
use showcase_wm::tracing_sub::{LogTarget, init_default, parse_level};
use showcase_wm::window::{RandomPlacement, WindowManager};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Property showcase desktop with floating windows, in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Initial theme: Pixel, 3D or "3D Rounded".
    #[arg(long, default_value_t = Theme::Pixel)]
    theme: Theme,

    /// Width of one terminal cell in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH, value_parser = clap::value_parser!(i32).range(1..=MAX_CELL_SIZE as i64))]
    cell_width: i32,

    /// Height of one terminal cell in pixels.
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT, value_parser = clap::value_parser!(i32).range(1..=MAX_CELL_SIZE as i64))]
    cell_height: i32,

    /// Seed for window placement, for reproducible layouts.
    #[arg(long)]
    seed: Option<u64>,

    /// Image file to add to the photo gallery. Repeatable.
    #[arg(long = "photo", value_name = "PATH")]
    photos: Vec<PathBuf>,

    /// Append logs to this file instead of the status bar.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[arg(long, default_value = "info", value_name = "LEVEL")]
    log_level: String,

    /// Dock item to open at start, e.g. `--open Home`. Repeatable.
    #[arg(long = "open", value_name = "TITLE")]
    open: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("showcase-wm: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let level = parse_level(&args.log_level)?;
    let log = LogBuffer::default();
    let target = match &args.log_file {
        Some(path) => LogTarget::file(path)?,
        None => LogTarget::Buffer(log.clone()),
    };
    init_default(target, level);

    let placement = match args.seed {
        Some(seed) => RandomPlacement::seeded(seed),
        None => RandomPlacement::from_entropy(),
    };
    let windows = WindowManager::new(placement, CellMetrics::new(args.cell_width, args.cell_height));
    let mut desktop = Desktop::new(
        windows,
        args.theme,
        ColorSupport::detect(),
        PhotoLibrary::with_samples().shared(),
    )
    .with_log_buffer(log);

    desktop.upload_photos(&args.photos, chrono::Local::now().date_naive());
    for title in &args.open {
        if desktop.open_from_dock(title).is_none() {
            tracing::warn!(%title, "no dock item with that title");
        }
    }
    tracing::info!(theme = %args.theme, "desktop ready");

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let result = run_desktop(&mut output, ConsoleInputDriver::new(), &mut desktop, FRAME_INTERVAL);
    output.exit()?;
    result?;
    Ok(())
}
