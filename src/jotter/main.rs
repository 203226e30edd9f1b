use clap::Parser;
use jotter::console::TermConsole;
use jotter::error::Result;
use jotter::init::{initialize, resolve_config, ConfigOverrides};
use jotter::logging::{init_logging, level_for, LogSink};
use jotter::shell::Shell;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let sink = LogSink::from_flags(cli.verbose, cli.log_dir.as_deref());
    let _logger = init_logging(level_for(cli.verbose), sink)?;

    let overrides = ConfigOverrides {
        save_dir: cli.dir.clone(),
        file_ext: cli.ext.clone(),
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;
    let api = initialize(&config)?;

    let mut shell = Shell::new(TermConsole::new(), api);
    shell.run()
}
