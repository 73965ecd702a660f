//! Validates catalog construction, mirror synthesis, and catalog file parsing

use roomwave::LayoutError;
use roomwave::io::catalog::{load_catalog, parse_catalog};
use roomwave::spatial::tiles::{
    Direction, ExitType, TileCatalog, TileDefinition, demo_rooms,
};
use std::io::Write;
use std::path::Path;

#[test]
fn test_empty_catalog_rejected() {
    let result = TileCatalog::build(vec![], false);
    assert!(matches!(result, Err(LayoutError::InvalidCatalog { .. })));
}

#[test]
fn test_mirrors_appended_after_snapshot() {
    let base = vec![
        TileDefinition::new(
            "corner",
            ExitType::Door,
            ExitType::Arch,
            ExitType::None,
            ExitType::None,
        ),
        TileDefinition::new(
            "closed",
            ExitType::None,
            ExitType::None,
            ExitType::None,
            ExitType::None,
        ),
    ];
    let catalog = TileCatalog::build(base, true).unwrap();

    // One mirror per base tile, appended after all originals
    assert_eq!(catalog.len(), 4);

    let original = catalog.tile(0).unwrap();
    assert_eq!(original.name, "corner");
    assert_eq!(original.east, ExitType::Arch);
    assert_eq!(original.west, ExitType::None);

    let mirror = catalog.tile(2).unwrap();
    assert_eq!(mirror.name, "corner_m");
    assert_eq!(mirror.north, ExitType::Door);
    assert_eq!(mirror.south, ExitType::None);
    assert_eq!(mirror.east, ExitType::None);
    assert_eq!(mirror.west, ExitType::Arch);
}

#[test]
fn test_compatibility_is_facing_edge_equality() {
    let catalog = TileCatalog::build(
        vec![
            TileDefinition::new(
                "door_east",
                ExitType::None,
                ExitType::Door,
                ExitType::None,
                ExitType::None,
            ),
            TileDefinition::new(
                "door_west",
                ExitType::None,
                ExitType::None,
                ExitType::None,
                ExitType::Door,
            ),
            TileDefinition::new(
                "arch_west",
                ExitType::None,
                ExitType::None,
                ExitType::None,
                ExitType::Arch,
            ),
        ],
        false,
    )
    .unwrap();

    assert!(catalog.compatible(0, Direction::East, 1));
    assert!(!catalog.compatible(0, Direction::East, 2));
    assert!(!catalog.compatible(1, Direction::East, 0));
    assert!(catalog.compatible(1, Direction::West, 0));
}

#[test]
fn test_demo_rooms_build() {
    let catalog = TileCatalog::build(demo_rooms(), false).unwrap();
    assert!(!catalog.is_empty());

    let closed = catalog
        .tiles()
        .iter()
        .find(|tile| tile.name == "closed")
        .unwrap();
    for direction in Direction::ALL {
        assert_eq!(closed.exit(direction), ExitType::None);
    }
}

#[test]
fn test_parse_catalog_text() {
    let text = "\
# comment line
closed  = none,none,none,none

hall_ew = none,door,none,door
arch_ew = NONE, Arch, none, arch
";
    let catalog = parse_catalog(text, Path::new("rooms.txt"), false).unwrap();

    assert_eq!(catalog.len(), 3);
    let hall = catalog.tile(1).unwrap();
    assert_eq!(hall.name, "hall_ew");
    assert_eq!(hall.north, ExitType::None);
    assert_eq!(hall.east, ExitType::Door);
    let arch = catalog.tile(2).unwrap();
    assert_eq!(arch.east, ExitType::Arch);
    assert_eq!(arch.west, ExitType::Arch);
}

#[test]
fn test_parse_unknown_exit_reports_line() {
    let text = "closed = none,none,none,none\nbroken = none,portal,none,none\n";
    let result = parse_catalog(text, Path::new("rooms.txt"), false);
    match result {
        Err(LayoutError::CatalogParse { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("portal"));
        }
        _ => unreachable!("Expected CatalogParse error type"),
    }
}

#[test]
fn test_parse_wrong_exit_count() {
    let text = "broken = none,none,none\n";
    let result = parse_catalog(text, Path::new("rooms.txt"), false);
    assert!(matches!(
        result,
        Err(LayoutError::CatalogParse { line: 1, .. })
    ));
}

#[test]
fn test_parse_duplicate_name() {
    let text = "room = none,none,none,none\nroom = none,door,none,door\n";
    let result = parse_catalog(text, Path::new("rooms.txt"), false);
    match result {
        Err(LayoutError::CatalogParse { line, reason, .. }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("duplicate"));
        }
        _ => unreachable!("Expected CatalogParse error type"),
    }
}

#[test]
fn test_parse_empty_file_is_invalid_catalog() {
    let text = "# only comments\n\n";
    let result = parse_catalog(text, Path::new("rooms.txt"), false);
    assert!(matches!(result, Err(LayoutError::InvalidCatalog { .. })));
}

#[test]
fn test_load_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rooms.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "closed = none,none,none,none").unwrap();
    writeln!(file, "hall_ew = none,door,none,door").unwrap();
    drop(file);

    let catalog = load_catalog(&path, true).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.tile(3).unwrap().name, "hall_ew_m");
}

#[test]
fn test_load_catalog_missing_file() {
    let result = load_catalog(Path::new("/nonexistent/rooms.txt"), false);
    assert!(matches!(result, Err(LayoutError::FileSystem { .. })));
}
