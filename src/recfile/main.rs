use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use recfile::api::{CmdMessage, CmdResult, MessageLevel, RecfileApi};
use recfile::config::RecfileConfig;
use recfile::error::{RecfileError, Result};
use recfile::store::fs::FileStore;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

const USAGE: &str = "\
Usage:
  recfile read <file>
  recfile list <file>
  recfile create <file> <text...>
  recfile update <file> <index> <text...>
  recfile delete <file> <index>
  recfile register <email> <password>
  recfile login <email> <password>";

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) if e.is_auth_failure() => {
            // Auth outcomes print like normal output but carry the
            // shell-visible failure code.
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Read { file }) => print_result(api.read(&file)?),
        Some(Commands::List { file }) => print_result(api.list(&file)?),
        Some(Commands::Create { file, text }) => print_result(api.create(&file, text.join(" "))?),
        Some(Commands::Update { file, index, text }) => {
            print_result(api.update(&file, &index, text.join(" "))?)
        }
        Some(Commands::Delete { file, index }) => print_result(api.delete(&file, &index)?),
        Some(Commands::Register { email, password }) => {
            print_result(api.register(&email, &password)?)
        }
        Some(Commands::Login { email, password }) => print_result(api.login(&email, &password)?),
        Some(Commands::Unknown(_)) | None => println!("{}", USAGE),
    }

    Ok(())
}

fn init_api(cli: &Cli) -> Result<RecfileApi<FileStore>> {
    let base_dir = resolve_base_dir(cli)?;
    let config = RecfileConfig::load(&base_dir)?;
    let store = FileStore::new(base_dir);
    Ok(RecfileApi::new(store, config))
}

/// Base directory, fixed once at startup: --dir flag, then RECFILE_DATA,
/// then the platform data dir.
fn resolve_base_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os("RECFILE_DATA") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "recfile", "recfile")
        .ok_or_else(|| RecfileError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn print_result(result: CmdResult) {
    for record in &result.records {
        println!("{}. {}", record.index, record.text);
    }
    if let Some(total) = result.total {
        println!("\nTotal records: {}", total);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
