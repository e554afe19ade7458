//! pirscreen-rpi - switch a Raspberry Pi display on while motion is seen
//!
//! # Usage
//!
//! ```bash
//! # Defaults: PIR on BCM 4, /usr/bin/vcgencmd, 25 s + 20 s window
//! pirscreen-rpi
//!
//! # With a settings file and transition logging
//! pirscreen-rpi --config /etc/pirscreen.toml --verbose
//!
//! # Different pin, no warm-up (sensor already settled)
//! pirscreen-rpi --pin 17 --warmup 0
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::Level;
use rppal::gpio::Gpio;

use pirscreen::rpi::{AppError, Overrides, Settings, VcgencmdDisplay};
use pirscreen::{runner, MotionDisplayController, PirSensor, StdClock, Step, Transition};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// BCM GPIO number of the PIR output
    #[arg(short, long)]
    pin: Option<u8>,

    /// Log every state transition
    #[arg(short, long)]
    verbose: bool,

    /// Sensor warm-up before polling starts (seconds)
    #[arg(long)]
    warmup: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_str()),
    )
    .init();

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Encountered error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings, AppError> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply(&Overrides {
        pin: args.pin,
        verbose: args.verbose,
        warmup_secs: args.warmup,
    });
    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let config = settings.controller_config()?;

    log::info!("pirscreen-rpi v{} starting...", env!("CARGO_PKG_VERSION"));
    log::info!(
        "PIR on BCM {}, display via {}",
        settings.sensor.pin,
        settings.display.vcgencmd.display()
    );
    log::info!(
        "On for {}s after motion, re-check window {}s",
        config.base_on.as_secs(),
        config.extension_window.as_secs()
    );

    // Pin is reset to its previous mode when the controller is dropped.
    let pin = Gpio::new()?.get(settings.sensor.pin)?.into_input();
    let sensor = PirSensor::new(pin);
    let display = VcgencmdDisplay::new(&settings.display.vcgencmd);
    let controller = MotionDisplayController::new(sensor, display, config);

    log::info!("Warming up for {}s", config.warmup.as_secs());

    let level = if config.verbose {
        Level::Info
    } else {
        Level::Debug
    };
    let mut clock = StdClock::new();
    let err = runner::run(controller, &mut clock, |_, step| log_step(level, step));

    log::info!("GPIO released");
    Err(err.into())
}

fn log_step(level: Level, step: &Step) {
    match step.transition {
        Some(Transition::DisplayOn) => {
            log::log!(level, "Screen on - waiting {}s", step.sleep.as_secs());
        }
        Some(Transition::Restarted { after }) => {
            log::log!(
                level,
                "Activity in on window after {:.1}s - restarting, waiting {}s",
                after.as_secs_f64(),
                step.sleep.as_secs()
            );
        }
        Some(Transition::WindowEntered) => {
            log::log!(level, "Watching for activity");
        }
        Some(Transition::WindowExpired { on_for }) => {
            log::log!(level, "No activity in window - screen off");
            log::log!(level, "Full on-cycle time: {:.1}s", on_for.as_secs_f64());
        }
        Some(Transition::DisplayOff) => {
            log::log!(level, "Screen off");
        }
        None => {
            log::trace!("Poll - next in {}ms", step.sleep.as_millis());
        }
    }
}
