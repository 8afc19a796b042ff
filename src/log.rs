use serde_derive::Deserialize;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

fn default_ansi() -> bool {
    true
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config level is not used.
/// With neither, no subscriber is installed and the tool stays quiet.
/// Logs go to stderr so command output on stdout stays clean.
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    config: &Option<Log>,
) {
    let (filter, ansi) = match (env_filter, config) {
        (Ok(env_filter), config) => (env_filter, config.as_ref().map_or(true, |c| c.ansi)),
        (Err(_), Some(log)) => (EnvFilter::new(&log.level), log.ansi),
        (Err(_), None) => return,
    };

    let subscriber = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc3339())
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(ansi)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("unable to install log subscriber: {}", err);
    }
}
