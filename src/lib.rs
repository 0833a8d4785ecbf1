#![deny(clippy::all)]

use anyhow::{Context, Error};
use thiserror::Error;
use tracing::info;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};

pub mod config;
mod logging;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::Session;

/// Entry point for the `graphsearch` binary.
pub fn driver() -> Result<(), Error> {
    let matches = config::app().get_matches();
    let config = Config::from_matches(&matches)?;
    logging::init_tracing(config.verbosity)?;

    run(&config)
}

/// Build a session from the configuration and run its command script.
pub fn run(config: &Config) -> Result<(), Error> {
    let mut session = Session::new(config.canvas, config.seed);

    if let Some(path) = &config.edges {
        let text = fs::read_to_string(path)
            .map_err(|e| GraphSearchError::EdgesNotFound(path.display().to_string(), e))?;
        let count = session
            .load_edges(&text)
            .with_context(|| format!("Loading edges from {}", path.display()))?;
        info!(count, path = %path.display(), "edges loaded");
    }

    let reader = get_input_reader(config.input.as_deref())?;
    let stdout = io::stdout();
    let failures = session.run_script(reader, &mut stdout.lock())?;

    if let Some(path) = &config.svg {
        fs::write(path, session.draw())
            .with_context(|| format!("Writing drawing to {}", path.display()))?;
        info!(path = %path.display(), "drawing written");
    }

    if failures > 0 {
        return Err(GraphSearchError::CommandsFailed(failures).into());
    }
    Ok(())
}

type BoxedRead = Box<dyn BufRead + 'static>;

pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(BufReader::new(io::stdin())),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| GraphSearchError::InputNotFound(path.to_string(), e))?;
            Box::new(BufReader::new(f))
        }
    };
    Ok(reader)
}

#[derive(Debug, Error)]
pub enum GraphSearchError {
    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),

    #[error("Edge list not found: {0}")]
    EdgesNotFound(String, #[source] io::Error),

    #[error("{0} command(s) failed")]
    CommandsFailed(usize),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_input_is_reported() {
        let err = get_input_reader(Some("no/such/script.txt")).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Input not found: no/such/script.txt"
        );
    }

    #[test]
    fn missing_edges_are_reported() {
        let config = Config {
            edges: Some("no/such/edges.txt".into()),
            ..Config::default()
        };
        let err = run(&config).unwrap_err();
        assert_eq!(err.to_string(), "Edge list not found: no/such/edges.txt");
    }
}
