//! Validates PNG and GIF export of generated layouts

use roomwave::algorithm::events::EventLog;
use roomwave::algorithm::process::{ContradictionPolicy, GenerationProcess, ProcessState};
use roomwave::io::image::export_layout_as_png;
use roomwave::io::visualization::VisualizationCapture;
use roomwave::spatial::tiles::{TileCatalog, demo_rooms};

fn generate(width: usize, height: usize, seed: u64) -> (GenerationProcess, EventLog) {
    let catalog = TileCatalog::build(demo_rooms(), false).unwrap();
    let mut process =
        GenerationProcess::new(catalog, width, height, ContradictionPolicy::Placeholder, seed)
            .unwrap();
    let mut log = EventLog::new();
    process.reset(&mut log);
    for _ in 0..width * height + 1 {
        if process.state() == ProcessState::Finished {
            break;
        }
        process.advance(&mut log);
    }
    (process, log)
}

#[test]
fn test_png_export_dimensions() {
    let (process, _) = generate(4, 3, 8);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.png");

    export_layout_as_png(
        process.grid().unwrap(),
        process.catalog(),
        &path,
    )
    .unwrap();

    assert!(path.exists());
    let (width, height) = image::image_dimensions(&path).unwrap();
    assert_eq!((width, height), (4 * 9, 3 * 7));
}

#[test]
fn test_png_export_creates_parent_directories() {
    let (process, _) = generate(2, 2, 3);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/layout.png");

    export_layout_as_png(
        process.grid().unwrap(),
        process.catalog(),
        &path,
    )
    .unwrap();

    assert!(path.exists());
}

#[test]
fn test_gif_export_writes_animation() {
    let (process, log) = generate(3, 3, 17);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout_steps.gif");

    let capture = VisualizationCapture::new(3, 3, process.catalog().clone());
    capture.export_gif(&log, &path).unwrap();

    assert!(path.exists());
    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}
