//! Development tasks for syntaxview.
//!
//! Run with `cargo run -p xtask -- <task>`.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use syntaxview::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for syntaxview and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man(&out),
    }
}

fn generate_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = Cli::command();
    write_page(out, &command, "syntaxview")?;
    for sub in command.get_subcommands() {
        let name = format!("syntaxview-{}", sub.get_name());
        write_page(out, sub, &name)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(out: &Path, command: &clap::Command, name: &str) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command.clone().name(name.to_string())).render(&mut buffer)?;

    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
