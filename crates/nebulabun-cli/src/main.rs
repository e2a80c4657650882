mod cli;
mod default_page;
mod launch;

use std::panic::{self, AssertUnwindSafe};

use tracing::{error, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "nebulabun=info";
const DEBUG_DIRECTIVE: &str = "nebulabun=debug";

/// Filter directive for this run, plus the `--log-level` value when it
/// could not be parsed and was replaced by the default.
fn log_directive(args: &cli::Args) -> (Directive, Option<&str>) {
    let fallback = if args.debug {
        DEBUG_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let default = || {
        fallback
            .parse()
            .unwrap_or_else(|_| tracing::Level::INFO.into())
    };
    match args.log_level.as_deref() {
        Some(level) => match level.parse() {
            Ok(directive) => (directive, None),
            Err(_) => (default(), Some(level)),
        },
        None => (default(), None),
    }
}

fn main() {
    let args = cli::parse();

    let (directive, rejected) = log_directive(&args);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
    if let Some(level) = rejected {
        warn!("ignoring invalid --log-level {level:?}, using the default");
    }

    let code = match panic::catch_unwind(AssertUnwindSafe(|| launch::run(args))) {
        Ok(Ok(code)) => code,
        Ok(Err(e)) => {
            error!("{e}");
            1
        }
        Err(_) => {
            error!("nebulabun panicked");
            1
        }
    };

    std::process::exit(code);
}
