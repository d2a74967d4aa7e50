use std::fs;
use std::path::{Path, PathBuf};

use movi_sort::workflow::{organize, verify_layout, OperationType, ProcessingOptions};
use tempfile::TempDir;

struct Fixture {
    _base: TempDir,
    root: PathBuf,
    inbox: PathBuf,
    config_path: PathBuf,
}

fn fixture(extra_config: &str) -> Fixture {
    let base = TempDir::new().unwrap();
    let root = base.path().join("dataset");
    let inbox = base.path().join("inbox");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&inbox).unwrap();

    let config_path = base.path().join("movi.yaml");
    fs::write(
        &config_path,
        format!(
            "root: {}\ninbox: {}\n{}",
            root.display(),
            inbox.display(),
            extra_config
        ),
    )
    .unwrap();

    Fixture {
        _base: base,
        root,
        inbox,
        config_path,
    }
}

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"movi").unwrap();
}

fn populate_inbox(fx: &Fixture) {
    touch(&fx.inbox.join("AMASS/F_amass_Subject_1.mat"));
    touch(&fx.inbox.join("F_Subjects_1_45/F_v3d_Subject_1.mat"));
    touch(&fx.inbox.join("F_Subjects_46_90/F_v3d_Subject_46.mat"));
    touch(&fx.inbox.join("Calib/cameraParams_PG1.npz"));
    touch(&fx.inbox.join("F_PG1_Subject_1_L.avi"));
    touch(&fx.inbox.join("notes.txt"));
}

#[test]
fn test_organize_moves_entries_into_canonical_folders() {
    let fx = fixture("");
    populate_inbox(&fx);

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    assert!(fx.root.join("AMASS/F_amass_Subject_1.mat").is_file());
    assert!(fx.root.join("Calib/cameraParams_PG1.npz").is_file());
    assert!(fx.root.join("Videos/F_PG1_Subject_1_L.avi").is_file());

    // Both subject archives merge into the shared V3D folder
    assert!(fx.root.join("V3D/F_v3d_Subject_1.mat").is_file());
    assert!(fx.root.join("V3D/F_v3d_Subject_46.mat").is_file());

    // Moved entries are gone from the inbox
    assert!(!fx.inbox.join("AMASS/F_amass_Subject_1.mat").exists());
    assert!(!fx.inbox.join("F_PG1_Subject_1_L.avi").exists());

    // The unmatched entry stays put
    assert!(fx.inbox.join("notes.txt").is_file());

    assert_eq!(context.stats.entries_processed, 6);
    assert_eq!(context.stats.entries_matched, 5);
    assert_eq!(context.stats.entries_moved, 5);
    assert_eq!(context.stats.entries_copied, 0);
    assert_eq!(context.stats.entries_skipped, 1);
    assert_eq!(context.stats.errors, 0);

    // The organised dataset satisfies the layout property
    let report = verify_layout(&fx.root).unwrap();
    assert!(report.is_complete());
}

#[test]
fn test_organize_copy_mode_keeps_sources() {
    let fx = fixture("copy: true\n");
    touch(&fx.inbox.join("F_PG2_Subject_7_L.avi"));

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    assert!(fx.root.join("Videos/F_PG2_Subject_7_L.avi").is_file());
    assert!(fx.inbox.join("F_PG2_Subject_7_L.avi").is_file());
    assert_eq!(context.stats.entries_copied, 1);
    assert_eq!(context.stats.entries_moved, 0);
}

#[test]
fn test_dry_run_plans_without_touching_the_filesystem() {
    let fx = fixture("");
    populate_inbox(&fx);

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: true,
    })
    .unwrap();

    // Nothing moved
    assert!(fx.inbox.join("AMASS/F_amass_Subject_1.mat").is_file());
    assert!(fx.inbox.join("F_PG1_Subject_1_L.avi").is_file());
    assert!(!fx.root.join("Videos").exists());

    assert_eq!(context.planned_operations.len(), 5);
    assert!(
        context
            .planned_operations
            .iter()
            .all(|op| op.operation_type == OperationType::Move)
    );

    let video_plan = context
        .planned_operations
        .iter()
        .find(|op| op.source.ends_with("F_PG1_Subject_1_L.avi"))
        .expect("Video transfer should be planned");
    assert_eq!(
        video_plan.destination,
        fx.root.join("Videos/F_PG1_Subject_1_L.avi")
    );
}

#[test]
fn test_ignored_entries_are_not_processed() {
    let fx = fixture("ignore:\n  - '*.md5'\n  - 'LICENSE*'\n");
    touch(&fx.inbox.join("checksums.md5"));
    touch(&fx.inbox.join("LICENSE.txt"));
    touch(&fx.inbox.join("F_PG1_Subject_2_L.avi"));

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(context.stats.entries_processed, 1);
    assert!(fx.inbox.join("checksums.md5").is_file());
    assert!(fx.inbox.join("LICENSE.txt").is_file());
    assert!(fx.root.join("Videos/F_PG1_Subject_2_L.avi").is_file());
}

#[test]
fn test_organize_overwrites_same_named_files() {
    let fx = fixture("");
    touch(&fx.inbox.join("F_PG1_Subject_3_L.avi"));

    let existing = fx.root.join("Videos/F_PG1_Subject_3_L.avi");
    fs::create_dir_all(existing.parent().unwrap()).unwrap();
    fs::write(&existing, b"stale").unwrap();

    organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(fs::read(&existing).unwrap(), b"movi");
}

#[test]
fn test_empty_destination_named_directory_is_still_moved() {
    let fx = fixture("");
    fs::create_dir_all(fx.inbox.join("AMASS")).unwrap();

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    // An extracted-but-empty archive directory still gets filed; the
    // verifier is what reports emptiness.
    assert!(fx.root.join("AMASS").is_dir());
    assert!(!fx.inbox.join("AMASS").exists());
    assert_eq!(context.stats.entries_matched, 1);
    assert_eq!(context.stats.entries_moved, 1);
    assert_eq!(context.stats.errors, 0);
}

#[test]
fn test_empty_inbox_is_a_noop() {
    let fx = fixture("");

    let context = organize(ProcessingOptions {
        config_path: fx.config_path.clone(),
        dry_run: false,
    })
    .unwrap();

    assert_eq!(context.stats.entries_processed, 0);
    assert!(context.planned_operations.is_empty());
}
