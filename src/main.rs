use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use log::{error, info, LevelFilter};

use critical_vertices::config::Cli;
use critical_vertices::{io, DomTree, Graph, Result};

fn init_logger(level: LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn stdin() -> Result<Vec<u8>> {
    let stdin = std::io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut input_buf: Vec<u8> = vec![];
    reader.read_to_end(&mut input_buf)?;
    Ok(input_buf)
}

fn run(cli: &Cli) -> Result<()> {
    let input_buf = match &cli.input {
        Some(path) => fs::read(path)?,
        None => stdin()?,
    };
    let problem = io::read_problem(&input_buf)?;
    drop(input_buf);
    info!("read {} vertices, {} edges", problem.n, problem.edges.len());

    let (source, target) = cli.endpoints(problem.n)?;
    let graph = Graph::from_edges(problem.n, problem.edges.iter().copied());
    drop(problem);

    let tree = DomTree::new(graph, source);
    let critical = critical_vertices::critical_vertices(&tree, target)?;
    info!("{} critical vertices", critical.len());

    let mut out = BufWriter::new(std::io::stdout().lock());
    io::write_answer(&mut out, &critical)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.log_level()) {
        eprintln!("failed to set logger: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
