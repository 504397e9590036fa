use anyhow::{Context, Result};
use colored::Colorize;
use linesift::config::Config;
use linesift::surface::SurfaceEntry;
use linesift::{FileSource, LineSift, MemorySource, OutputSurface, TextSource};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::ProcessArgs;

pub fn handle(args: ProcessArgs) -> Result<()> {
    let mut linesift = LineSift::new(".")
        .context("Failed to load linesift configuration")?;
    apply_overrides(linesift.config_mut(), &args);

    // Fail on a bad pattern before touching stdin or any file
    linesift.config().transform_config()?;

    let sources = collect_sources(&args.paths)?;
    let surface = OutputSurface::new();
    let report = linesift.process(&sources, &surface, args.jobs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !args.quiet {
        print_entries(&surface);
    }

    if let Some(text) = linesift.output_text(&report, &surface) {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)?;
    }

    if !args.quiet && report.has_failures() {
        eprintln!("\n{} {} of {} files could not be read",
            "⚠".bright_yellow(),
            report.failed().count(),
            report.outcomes.len());
    }

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &ProcessArgs) {
    let transform = &mut config.data.transform;
    if args.remove_blank {
        transform.remove_blank = true;
    }
    if args.trim {
        transform.trim = Some(true);
    } else if args.no_trim {
        transform.trim = Some(false);
    }
    if let Some(pattern) = &args.pattern {
        transform.pattern = pattern.clone();
    }
    if let Some(substitute) = &args.substitute {
        transform.substitute = substitute.clone();
    }

    let output = &mut config.data.output;
    if let Some(mode) = args.mode {
        output.mode = mode;
    }
    if let Some(ending) = args.line_ending {
        output.line_ending = ending;
    }
}

fn collect_sources(paths: &[PathBuf]) -> Result<Vec<Box<dyn TextSource>>> {
    let mut sources: Vec<Box<dyn TextSource>> = Vec::new();

    if paths.is_empty() {
        sources.push(Box::new(read_stdin()?));
        return Ok(sources);
    }

    for path in paths {
        if path.as_os_str() == "-" {
            sources.push(Box::new(read_stdin()?));
        } else if path.is_dir() {
            for file in expand_dir(path) {
                sources.push(Box::new(FileSource::new(file)));
            }
        } else {
            // Missing files become read failures in the batch instead of aborting it
            sources.push(Box::new(FileSource::new(path)));
        }
    }

    Ok(sources)
}

fn read_stdin() -> Result<MemorySource> {
    let source = MemorySource::from_reader("stdin", std::io::stdin().lock())
        .context("Failed to read stdin")?;
    Ok(source)
}

fn expand_dir(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            // Skip hidden entries below the root
            !e.path()
                .strip_prefix(dir)
                .unwrap_or(e.path())
                .components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .map(|e| e.into_path())
        .collect()
}

fn print_entries(surface: &OutputSurface) {
    let snapshot = surface.snapshot();
    eprintln!("{}", "Files".bright_blue().bold());
    for entry in &snapshot.entries {
        match entry {
            SurfaceEntry::File(summary) => {
                eprintln!("  {} {}", "•".bright_cyan(), summary);
            }
            SurfaceEntry::Failed(failure) => {
                eprintln!("  {} {}", "✗".bright_red(), failure.to_string().bright_red());
            }
        }
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        let args = ProcessArgs {
            remove_blank: true,
            no_trim: true,
            pattern: Some("x".to_string()),
            substitute: Some("y".to_string()),
            ..Default::default()
        };

        apply_overrides(&mut config, &args);
        let transform = config.transform_config().unwrap();
        assert!(transform.remove_blank_enabled);
        assert!(!transform.trim_enabled);
        assert!(transform.substitution().is_some());
    }

    #[test]
    fn test_expand_dir_skips_hidden_and_sorts() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("b.txt"), "b")?;
        fs::write(temp_dir.path().join("a.txt"), "a")?;
        fs::create_dir(temp_dir.path().join(".git"))?;
        fs::write(temp_dir.path().join(".git").join("HEAD"), "ref")?;

        let files = expand_dir(temp_dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        Ok(())
    }

    #[test]
    fn test_missing_path_is_kept_as_source() -> Result<()> {
        let sources = collect_sources(&[PathBuf::from("/no/such/file.log")])?;
        assert_eq!(sources.len(), 1);
        assert!(sources[0].read_text().is_err());
        Ok(())
    }
}
