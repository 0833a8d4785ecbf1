use std::path::PathBuf;

use anyhow::Error;
use clap::{App, Arg, ArgMatches};
use geometry::coord2d::Canvas;

/// Everything the command line can tune.
#[derive(Debug, Clone)]
pub struct Config {
    /// Command script; `None` or `-` reads standard input.
    pub input: Option<String>,
    /// Edge list loaded before the script runs.
    pub edges: Option<PathBuf>,
    /// Where to write the final drawing.
    pub svg: Option<PathBuf>,
    pub seed: Option<u64>,
    pub canvas: Canvas,
    pub verbosity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            edges: None,
            svg: None,
            seed: None,
            canvas: Canvas::default(),
            verbosity: 0,
        }
    }
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("graphsearch")
        .version("0.1.0")
        .about("Build a weighted graph and search it with BFS, DFS and UCS")
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Command script to run, or - for standard input")
                .required(false)
                .takes_value(true)
                .index(1),
        )
        .arg(
            Arg::with_name("edges")
                .short("e")
                .long("edges")
                .value_name("FILE")
                .help("Load FROM TO COST edges before running commands")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("svg")
                .long("svg")
                .value_name("FILE")
                .help("Draw the final graph to an SVG file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("N")
                .help("Seed for node placement")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("canvas")
                .long("canvas")
                .value_name("WxH")
                .help("Size of the drawing area")
                .default_value("800x600")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        Ok(Self {
            input: matches.value_of("input").map(String::from),
            edges: matches.value_of("edges").map(PathBuf::from),
            svg: matches.value_of("svg").map(PathBuf::from),
            seed: matches
                .value_of("seed")
                .map(|s| s.parse::<u64>())
                .transpose()?,
            canvas: matches.value_of("canvas").unwrap_or("800x600").parse()?,
            verbosity: matches.occurrences_of("verbose"),
        })
    }
}
