/*!
 * End-to-end caption processing tests
 */

use anyhow::Result;
use vttknow::app_config::Config;
use vttknow::app_controller::Controller;
use vttknow::knowledge_export::{ChunkEntry, MasterEntry};
use crate::common;

/// Test a directory with a caption file and metadata sidecar produces the
/// document, master line and chunk lines
#[test]
fn test_run_withCaptionAndSidecar_shouldProduceAllExports() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_caption(input_dir.path(), "Intro to Knots.en.vtt")?;
    common::create_test_sidecar(input_dir.path(), "Intro to Knots", "Intro to Knots")?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(input_dir.path(), output_dir.path())?;
    assert_eq!(report.processed, 1);
    assert_eq!(report.skipped, 0);

    // Per-video document named after the slugged title
    let doc = std::fs::read_to_string(output_dir.path().join("Intro_to_Knots.txt"))?;
    assert!(doc.starts_with("TITLE: Intro to Knots\n"));
    assert!(doc.contains(common::ROLLING_EXPECTED));

    // One master line holding the full transcript
    let master = std::fs::read_to_string(Controller::master_export_path(output_dir.path()))?;
    let master_lines: Vec<&str> = master.lines().collect();
    assert_eq!(master_lines.len(), 1);
    let entry: MasterEntry = serde_json::from_str(master_lines[0])?;
    assert_eq!(entry.content, common::ROLLING_EXPECTED);
    assert_eq!(entry.metadata.title, "Intro to Knots");
    assert_eq!(entry.metadata.view_count, 42);

    // Chunk lines with slug-prefixed ids
    let chunks = std::fs::read_to_string(Controller::chunks_export_path(output_dir.path()))?;
    let chunk_lines: Vec<&str> = chunks.lines().collect();
    assert!(!chunk_lines.is_empty());
    let first: ChunkEntry = serde_json::from_str(chunk_lines[0])?;
    assert_eq!(first.chunk_id, "Intro_to_Knots_0");
    assert_eq!(first.metadata.channel, "Test Channel");
    Ok(())
}

/// Test a caption file without a sidecar falls back to its stem for naming
#[test]
fn test_run_withoutSidecar_shouldUseFileStem() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_caption(input_dir.path(), "No Metadata Here.en.vtt")?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(input_dir.path(), output_dir.path())?;
    assert_eq!(report.processed, 1);

    assert!(output_dir.path().join("No_Metadata_Here.txt").exists());

    let master = std::fs::read_to_string(Controller::master_export_path(output_dir.path()))?;
    let entry: MasterEntry = serde_json::from_str(master.lines().next().unwrap())?;
    assert_eq!(entry.metadata.title, "");
    Ok(())
}

/// Test a caption file with no spoken content is skipped, not an error
#[test]
fn test_run_withEmptyCaption_shouldSkipFile() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_file(
        input_dir.path(),
        "empty.en.vtt",
        "WEBVTT\nKind: captions\n\n00:00:01.000 --> 00:00:02.000\n\n",
    )?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(input_dir.path(), output_dir.path())?;
    assert_eq!(report.processed, 0);
    assert_eq!(report.skipped, 1);
    Ok(())
}

/// Test several caption files land in one pair of export files
#[test]
fn test_run_withMultipleCaptions_shouldAggregateExports() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    common::create_test_caption(input_dir.path(), "First Video.en.vtt")?;
    common::create_test_caption(input_dir.path(), "Second Video.en.vtt")?;

    let controller = Controller::new_for_test()?;
    let report = controller.run(input_dir.path(), output_dir.path())?;
    assert_eq!(report.processed, 2);

    let master = std::fs::read_to_string(Controller::master_export_path(output_dir.path()))?;
    assert_eq!(master.lines().count(), 2);
    Ok(())
}

/// Test a missing input directory is an error up front
#[test]
fn test_run_withMissingInputDir_shouldFail() -> Result<()> {
    let output_dir = common::create_temp_dir()?;
    let controller = Controller::new_for_test()?;
    let missing = output_dir.path().join("does_not_exist");

    assert!(controller.run(&missing, output_dir.path()).is_err());
    Ok(())
}

/// Test an invalid configuration is rejected at controller construction
#[test]
fn test_with_config_withInvalidConfig_shouldFail() {
    let mut config = Config::default();
    config.overlap = config.chunk_size;
    assert!(Controller::with_config(config).is_err());
}
