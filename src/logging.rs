use anyhow::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable which overrides the verbosity flags.
pub const LOG_ENV: &str = "GRAPHSEARCH_LOG";

fn level(verbosity: u64) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber.
///
/// Each `-v` raises the level for the crates in this workspace.
pub fn init_tracing(verbosity: u64) -> Result<(), Error> {
    let level = level(verbosity);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "graphsearch={level},searcher={level},geometry={level}",
            level = level
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(2), "debug");
        assert_eq!(level(9), "trace");
    }
}
