use anyhow::{Context, Result};
use colored::Colorize;
use linesift::config::Config;
use std::path::Path;

pub fn handle(path: &Path) -> Result<()> {
    let (config_path, created) = Config::init(path)
        .context("Failed to initialize linesift in the specified directory")?;

    if !created {
        println!("{} Config already exists at {}", "ℹ".bright_blue(), config_path.display());
        return Ok(());
    }

    println!("{} Wrote default settings to {}", "✓".bright_green(), config_path.display());

    println!("\n{}", "Quick start:".bright_blue().bold());
    println!("  1. Drop blank lines and trim the rest:");
    println!("     {}", "linesift config set transform.remove_blank true".bright_yellow());
    println!("  2. Keep only lines with numbers, rewritten:");
    println!("     {}", "linesift process app.log -p '(\\d+)' -s 'num:$1'".bright_yellow());

    Ok(())
}
