use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wayfarer::engine::{NavigationPolicy, Output, OutputBlock};
use wayfarer::{MapFormat, Session, load_map_from_file, read_input_line};

/// Explore a map of rooms from the terminal.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(version, about = "Wander a room map, pick things up, put them down.", long_about = None)]
struct Args {
    /// Map file (JSON, or TOML with a .toml extension)
    map: PathBuf,

    /// Map encoding; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<MapFormat>,

    /// Allow walking back through any exit instead of backtracking via self-loops
    #[arg(long)]
    free_roam: bool,
}

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{}", t),
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Items(items) => println!("{}", items),
            OutputBlock::Exits(exits) => println!("\n{}", exits),
        }
    }
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let graph = match load_map_from_file(&args.map, args.format) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to load map: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let policy = if args.free_roam {
        NavigationPolicy::FreeRoam
    } else {
        NavigationPolicy::Backtracking
    };
    info!(?policy, start = %graph.start(), "session started");

    let mut session = Session::new(graph, policy);
    println!("Type 'help' for a list of commands, 'quit' to exit.");
    flush_output(session.initialize());

    let mut stdin = io::stdin().lock();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = read_input_line(&mut stdin)? else {
            println!("\nGoodbye!");
            break;
        };

        let (out, quit) = session.step(&line);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(ExitCode::SUCCESS)
}
