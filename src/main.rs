use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::input::prevent_quit;
use macroquad::window::{Conf, next_frame};
use tracing::{error, info};

use drumkit::app::DrumKitController;
use drumkit::audio::AudioDriver;
use drumkit::config::AppConfig;
use drumkit::input::KeyboardInput;
use drumkit::kit::KitDefinition;
use drumkit::render::PadRenderer;
use drumkit::traits::time::{SystemTimeProvider, TimeProvider};
use drumkit::util::error::UserError;
use drumkit::util::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "drumkit", about = "Play drum samples from the keyboard")]
struct Args {
    /// Config file (default: drumkit.json in the working directory).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Kit definition file; overrides `kit_path` from the config.
    #[arg(short, long)]
    kit: Option<PathBuf>,

    /// Show debug logs.
    #[arg(short, long)]
    verbose: bool,

    /// Also write logs to a daily rolling file in this directory.
    #[arg(long, env = "DRUMKIT_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Write the built-in kit as JSON to this path and exit.
    #[arg(long, value_name = "PATH")]
    write_default_kit: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let _log_guard = match init_logging(args.log_dir.as_deref(), args.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    if let Some(path) = args.write_default_kit {
        KitDefinition::builtin().save_to(&path)?;
        info!("Wrote built-in kit to {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path).with_context(|| UserError::config_error(path))?,
        None => AppConfig::load()?,
    };

    let kit = match args.kit.as_ref().or(config.kit_path.as_ref()) {
        Some(path) => {
            info!("Loading kit {}", path.display());
            KitDefinition::load_from(path).with_context(|| UserError::kit_load_error(path))?
        }
        None => KitDefinition::builtin(),
    };

    let driver = AudioDriver::new().context(UserError::audio_init_error())?;
    let controller = DrumKitController::new(&kit, config.kit_settings(), driver)
        .context(UserError::kit_mapping_error())?;
    let renderer = PadRenderer::new(config.fade_ms);

    let conf = Conf {
        window_title: "drumkit".to_owned(),
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        fullscreen: config.fullscreen,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, frame_loop(controller, renderer));
    Ok(())
}

async fn frame_loop(mut kit: DrumKitController<AudioDriver>, renderer: PadRenderer) {
    // The close button is reported through `quit_requested` instead of
    // ending the loop, so both exits tear down.
    prevent_quit();
    let mut input = KeyboardInput::new();
    let mut clock = SystemTimeProvider::new();
    clock.rebase();
    kit.on_load(clock.now_ms());

    loop {
        let now_ms = clock.now_ms();
        if !kit.frame(&mut input, now_ms) {
            break;
        }
        renderer.draw(kit.board(), now_ms);
        next_frame().await;
    }

    info!("Closed");
}
