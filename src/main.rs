use std::env;
use std::io;
use std::process::ExitCode;
use log::{error, warn};
use crate::config::{config_path_from_args, load_config, Config};
use crate::encoder::SystemClock;
use crate::errors::TriLightError;
use crate::logging::init_logging;
use crate::manager_lamp::{Lamp, Reply};
use crate::session::{clear_screen, print_banner};

mod collector;
mod config;
mod encoder;
mod errors;
mod logging;
mod manager_lamp;
mod models;
mod pipeline;
mod session;

/// Exit code when the line was sent but the lamp never answered
const EXIT_NO_RESPONSE: u8 = 2;

fn main() -> ExitCode {
    let (config_path, unknown_args) = config_path_from_args(env::args().skip(1));

    let config = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            let e = TriLightError::from(e);
            eprintln!("TriLight configuration failed during {}: {}", e.stage(), e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.general) {
        eprintln!("Logging disabled: {:#}", e);
    }
    for arg in unknown_args {
        warn!("ignoring unknown argument: {}", arg);
        eprintln!("Ignoring unknown argument: {}", arg);
    }

    match run(&config) {
        Ok(Reply::Line(_)) => ExitCode::SUCCESS,
        Ok(Reply::NoResponse) => ExitCode::from(EXIT_NO_RESPONSE),
        Err(e) => {
            error!("{}", e);
            eprintln!("TriLight configuration failed during {}: {}", e.stage(), e);
            ExitCode::FAILURE
        }
    }
}

/// Bootstraps the session and runs it, the lamp port is closed when this returns
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn run(config: &Config) -> Result<Reply, TriLightError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    clear_screen(&mut out);
    print_banner(&mut out).map_err(|e| TriLightError::Console(e.to_string()))?;

    let mut lamp = Lamp::open(&config.serial.device_path, config.serial.baud_rate, config.serial.poll_interval())?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    pipeline::run_session(&mut lamp, &mut input, &mut out, &SystemClock, config.serial.response_timeout())
}
