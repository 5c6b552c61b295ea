//! Command-line configuration.
//!
//! Lives in the library so that tests can drive [`Cli::try_parse_from`]
//! without spawning the binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::error::{Error, Result};

/// Prints the vertices lying on every path from the source to the target.
///
/// Input: `N M`, then `M` directed edges `u v` with 1-based ids.
/// Output: the number of critical vertices, then the vertices in ascending order.
#[derive(Parser, Debug)]
#[command(name = "main", version)]
pub struct Cli {
    /// Read the graph from this file instead of stdin
    pub input: Option<PathBuf>,

    /// Source vertex, 1-based [default: 1]
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub source: Option<u32>,

    /// Target vertex, 1-based [default: N]
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..))]
    pub target: Option<u32>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Resolves the 0-based `(source, target)` pair for a graph on `n` vertices.
    pub fn endpoints(&self, n: usize) -> Result<(u32, u32)> {
        let resolve = |u: Option<u32>, default: usize| -> Result<u32> {
            let u = u.map_or(default as u64, u64::from);
            if u == 0 || u > n as u64 {
                return Err(Error::VertexOutOfRange { vertex: u, n });
            }
            Ok(u as u32 - 1)
        };
        Ok((resolve(self.source, 1)?, resolve(self.target, n)?))
    }
}
