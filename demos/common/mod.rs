//! Tracing setup shared by the demo programs.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// CLI arguments for controlling tracing output.
///
/// Embed into a demo's CLI with `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Increase logging verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Suppress all output except warnings and errors
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log output format
    #[arg(long = "log-format", default_value = "compact", global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Single line per event
    #[default]
    Compact,
    /// Multi-line with colors
    Pretty,
}

impl TracingArgs {
    /// Install the global subscriber.
    ///
    /// `RUST_LOG` wins when it's set. Otherwise `-q` means warn, no flag
    /// means info, `-v` debug and `-vv` trace.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = if self.quiet {
                "warn"
            } else {
                match self.verbosity {
                    0 => "info",
                    1 => "debug",
                    _ => "trace",
                }
            };
            EnvFilter::new(format!("{level},bounty_holdem={level}"))
        };

        match self.log_format {
            LogFormat::Compact => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().compact())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty())
                    .init();
            }
        }
    }
}
