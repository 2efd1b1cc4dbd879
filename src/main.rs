use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use gitlink::config::UserConfig;
use gitlink::git::GitError;
use gitlink::link::ViewKind;
use gitlink::styling::error_message;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    if let Err(error) = run(cli) {
        // GitError formats itself with styling; everything else gets the
        // uniform error prefix with its context chain.
        if error.downcast_ref::<GitError>().is_some() {
            eprintln!("{error}");
        } else {
            eprintln!("{}", error_message(format!("{error:#}")));
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = UserConfig::load()?;
    let base = cli.directory.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::File { path, lines } => commands::handle_view(
            ViewKind::File,
            &resolve_arg(&base, path),
            lines,
            &config,
            cli.print,
        ),
        Commands::Blame { path, lines } => commands::handle_view(
            ViewKind::Blame,
            &resolve_arg(&base, path),
            lines,
            &config,
            cli.print,
        ),
        Commands::History { path } => commands::handle_view(
            ViewKind::History,
            &resolve_arg(&base, path),
            None,
            &config,
            cli.print,
        ),
        Commands::Compare { source, target } => {
            commands::handle_compare(&base, source, target, &config, cli.print)
        }
        Commands::Project => commands::handle_project(&base, cli.print),
    }
}

/// Interpret a path argument relative to the `-C` base directory.
fn resolve_arg(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
