use linesift::config::Config;
use linesift::surface::SurfaceEntry;
use linesift::{
    Batch, FileSource, LineEnding, LineSift, MemorySource, OutputMode, OutputSurface,
    TextSource, TransformConfig,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_one_unreadable_file_does_not_hide_the_other() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let good = temp_dir.path().join("good.log");
    fs::write(&good, "  first  \n\nsecond\n")?;
    let missing = temp_dir.path().join("missing.log");

    let config = TransformConfig::new(true, true, None, None)?;
    let sources = vec![FileSource::new(&missing), FileSource::new(&good)];
    let surface = OutputSurface::new();

    let report = Batch::new(&config).run(&sources, &surface)?;

    let processed: Vec<_> = report.succeeded().collect();
    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].name, "good.log");
    assert_eq!(processed[0].line_count, 4);
    assert_eq!(processed[0].transformed_text, "first\r\nsecond");

    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].name, "missing.log");

    let snapshot = surface.snapshot();
    assert_eq!(snapshot.output.as_deref(), Some("first\r\nsecond"));
    let summaries = snapshot
        .entries
        .iter()
        .filter(|e| matches!(e, SurfaceEntry::File(_)))
        .count();
    assert_eq!(summaries, 1);
    Ok(())
}

#[test]
fn test_summary_uses_file_modification_time() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("dated.txt");
    fs::write(&path, "x")?;

    let source = FileSource::new(&path);
    let expected = source.last_modified()?;

    let report = Batch::new(&TransformConfig::default()).run(&[source], &OutputSurface::new())?;
    let result = report.succeeded().next().unwrap();
    assert_eq!(result.last_modified, expected);
    assert_eq!(result.line_count, 1);
    Ok(())
}

#[test]
fn test_concat_mode_joins_in_input_order() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.data.output.mode = OutputMode::Concat;
    config.data.output.line_ending = LineEnding::Lf;
    config.data.transform.remove_blank = true;
    let linesift = LineSift::with_config(config);

    let sources = vec![
        MemorySource::new("one.txt", "a\n\nb"),
        MemorySource::failing("two.txt", "locked"),
        MemorySource::new("three.txt", "  c  "),
    ];
    let surface = OutputSurface::new();

    let report = linesift.process(&sources, &surface, Some(2))?;
    assert_eq!(linesift.output_text(&report, &surface).as_deref(), Some("a\nb\nc"));
    Ok(())
}

#[test]
fn test_last_mode_shows_single_file_output() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.data.transform.pattern = r"(\w+)=(\w+)".to_string();
    config.data.transform.substitute = "$2<-$1".to_string();
    let linesift = LineSift::with_config(config);

    let sources = vec![MemorySource::new("env", "A=1\n# comment\nB=2\n")];
    let surface = OutputSurface::new();

    let report = linesift.process(&sources, &surface, None)?;
    assert_eq!(
        linesift.output_text(&report, &surface).as_deref(),
        Some("1<-A\r\n2<-B")
    );
    Ok(())
}

#[test]
fn test_invalid_configured_pattern_fails_before_reading() {
    let mut config = Config::default();
    config.data.transform.pattern = "(".to_string();
    config.data.transform.substitute = "$1".to_string();
    let linesift = LineSift::with_config(config);

    let surface = OutputSurface::new();
    let result = linesift.process(&[MemorySource::new("a", "b")], &surface, None);
    assert!(result.is_err());
    assert!(surface.snapshot().entries.is_empty());
}

#[test]
fn test_batch_of_boxed_sources() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("disk.txt");
    fs::write(&path, "from disk")?;

    let sources: Vec<Box<dyn TextSource>> = vec![
        Box::new(FileSource::new(&path)),
        Box::new(MemorySource::new("stdin", "from memory")),
    ];
    let report = Batch::new(&TransformConfig::default())
        .with_line_ending(LineEnding::Lf)
        .run(&sources, &OutputSurface::new())?;

    assert_eq!(report.concatenated_output(LineEnding::Lf), "from disk\nfrom memory");
    assert!(!report.has_failures());
    Ok(())
}

#[test]
fn test_report_serializes_processed_and_failed() -> anyhow::Result<()> {
    let sources = vec![
        MemorySource::new("ok.txt", "line"),
        MemorySource::failing("bad.txt", "nope"),
    ];
    let report = Batch::new(&TransformConfig::default()).run(&sources, &OutputSurface::new())?;

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["processed"][0]["name"], "ok.txt");
    assert_eq!(json["processed"][0]["line_count"], 1);
    assert_eq!(json["failed"][0]["message"], "nope");
    Ok(())
}
