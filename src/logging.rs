use anyhow::{Context, Result};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::config::General;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l:<5} {m}{n}";

/// Builds the log4rs configuration from the general section of the config
///
/// Standard output belongs to the operator dialogue, so console logging goes to standard error.
///
/// # Arguments
///
/// * 'general' - general configuration parameters
fn build_log_config(general: &General) -> Result<log4rs::Config> {
    let mut builder = log4rs::Config::builder();
    let mut root = Root::builder();

    if general.log_to_stderr {
        let stderr = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stderr", Box::new(stderr)));
        root = root.appender("stderr");
    }

    if let Some(log_path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(log_path)
            .with_context(|| format!("unable to open log file {}", log_path))?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(general.log_level))
        .context("invalid logging configuration")?;

    Ok(config)
}

/// Sets up logging for the rest of the run
///
/// # Arguments
///
/// * 'general' - general configuration parameters
pub fn init_logging(general: &General) -> Result<()> {
    let config = build_log_config(general)?;
    log4rs::init_config(config).context("logger already initialized")?;

    Ok(())
}
