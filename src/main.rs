//! pirscreen firmware - nRF52840 + PIR + SSD1306.
//!
//! A single Embassy task runs the controller: poll the PIR line, apply
//! the directive to the OLED panel, then await the returned sleep.
//!
//! Flash: `cargo run --release --features embedded --target thumbv7em-none-eabihf`

#![no_std]
#![no_main]

mod oled;

use core::time::Duration;

use defmt::{debug, error, info, Debug2Format};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use pirscreen::{ControllerConfig, MotionDisplayController, PirSensor, Step, Transition};
use {defmt_rtt as _, panic_probe as _};

use crate::oled::OledPower;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// The firmware always narrates transitions over RTT.
const CONFIG: ControllerConfig = ControllerConfig {
    warmup: Duration::from_secs(pirscreen::config::WARMUP_SECS),
    base_on: Duration::from_secs(pirscreen::config::BASE_ON_SECS),
    extension_window: Duration::from_secs(pirscreen::config::EXTENSION_WINDOW_SECS),
    idle_poll: Duration::from_millis(pirscreen::config::IDLE_POLL_MS),
    extension_poll: Duration::from_millis(pirscreen::config::EXTENSION_POLL_MS),
    verbose: true,
};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("pirscreen starting");

    if let Err(e) = CONFIG.validate() {
        error!("Invalid timing: {}", e);
        halt().await;
    }

    // PIR OUT is push-pull; the pull-down keeps an unplugged sensor quiet.
    let pir = Input::new(p.P0_03, Pull::Down);
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());

    let panel = match oled::init(i2c) {
        Ok(panel) => panel,
        Err(e) => {
            error!("OLED init failed: {}", Debug2Format(&e));
            halt().await
        }
    };

    let mut controller =
        MotionDisplayController::new(PirSensor::new(pir), OledPower::new(panel), CONFIG);

    info!("Warming up for {}s", CONFIG.warmup.as_secs());
    match controller.warm_up() {
        Ok(delay) => Timer::after(to_embassy(delay)).await,
        Err(e) => {
            error!("Encountered error: {}", Debug2Format(&e));
            halt().await
        }
    }

    loop {
        let now = Duration::from_micros(Instant::now().as_micros());
        match controller.poll(now) {
            Ok(step) => {
                log_step(&step);
                Timer::after(to_embassy(step.sleep)).await;
            }
            Err(e) => {
                error!("Encountered error: {}", Debug2Format(&e));
                break;
            }
        }
    }

    // Releases the PIR input and the I²C bus.
    drop(controller);
    halt().await
}

fn to_embassy(d: Duration) -> embassy_time::Duration {
    embassy_time::Duration::from_micros(d.as_micros() as u64)
}

fn log_step(step: &Step) {
    match step.transition {
        Some(Transition::DisplayOn) => {
            info!("Screen on - waiting {}s", step.sleep.as_secs());
        }
        Some(Transition::Restarted { after }) => {
            info!(
                "Activity in on window after {}ms - restarting",
                after.as_millis() as u64
            );
        }
        Some(Transition::WindowEntered) => info!("Watching for activity"),
        Some(Transition::WindowExpired { on_for }) => {
            info!(
                "No activity in window - screen off after {}ms",
                on_for.as_millis() as u64
            );
        }
        Some(Transition::DisplayOff) => info!("Screen off"),
        None => debug!("Poll - next in {}ms", step.sleep.as_millis() as u64),
    }
}

/// Park the task; the fatal path ends here.
async fn halt() -> ! {
    loop {
        Timer::after_secs(3600).await;
    }
}
