use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{info, render, IoParameters};

#[derive(Parser, Debug)]
#[command(
    name = "molsvg",
    about = "A command-line tool for rendering small-molecule structure files as depth-ordered SVG documents.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Input structure file. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the molecule as an SVG document, optionally rotating it first.
    Render(render::RenderArgs),
    /// Summarize the parsed molecule without rendering it.
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let io_params = IoParameters {
        input: cli.input.clone(),
        output: cli.output.clone(),
    };

    match cli.command {
        Command::Render(args) => render::run(&io_params, &args),
        Command::Info(args) => info::run(&io_params, &args),
    }
}
