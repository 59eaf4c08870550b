use event_media::fs::{max_index, rename_into_event};
use event_media::tags::{add_tags, remove_tags};
use eyre::Result;
use tempfile::tempdir;

#[test]
fn max_index_handles_mixed_padding() -> Result<()> {
    let tmp = tempdir()?;
    std::fs::write(tmp.path().join("trip_001.jpg"), b"")?;
    std::fs::write(tmp.path().join("trip_00045[beach].png"), b"")?;
    std::fs::write(tmp.path().join("other_099.jpg"), b"")?;

    assert_eq!(max_index(tmp.path(), "trip")?, 45);
    assert_eq!(max_index(tmp.path(), "other")?, 99);
    assert_eq!(max_index(tmp.path(), "nothing")?, 0);
    Ok(())
}

#[test]
fn rename_assigns_next_free_indices() -> Result<()> {
    let tmp = tempdir()?;
    std::fs::write(tmp.path().join("holiday_001.jpg"), b"")?;
    std::fs::write(tmp.path().join("a.png"), b"")?;
    std::fs::write(tmp.path().join("b.mov"), b"")?;

    let renamed = rename_into_event(tmp.path(), "holiday")?;
    assert_eq!(renamed.len(), 2);

    // Unformatted files are picked up in path order and continue after the
    // highest existing index.
    assert!(tmp.path().join("holiday_002.png").exists());
    assert!(tmp.path().join("holiday_003.mov").exists());
    assert!(!tmp.path().join("a.png").exists());
    assert!(!tmp.path().join("b.mov").exists());
    // Already formatted file untouched.
    assert!(tmp.path().join("holiday_001.jpg").exists());
    Ok(())
}

#[test]
fn rename_sanitizes_event_name() -> Result<()> {
    let tmp = tempdir()?;
    std::fs::write(tmp.path().join("a.png"), b"")?;

    rename_into_event(tmp.path(), "trip/2024")?;
    assert!(tmp.path().join("trip_2024_001.png").exists());
    Ok(())
}

#[test]
fn rename_skips_directories_and_extensionless_files() -> Result<()> {
    let tmp = tempdir()?;
    std::fs::create_dir(tmp.path().join("subdir"))?;
    std::fs::write(tmp.path().join("README"), b"")?;

    let renamed = rename_into_event(tmp.path(), "holiday")?;
    assert!(renamed.is_empty());
    assert!(tmp.path().join("subdir").exists());
    assert!(tmp.path().join("README").exists());
    Ok(())
}

#[test]
fn tag_add_and_remove_rename_in_place() -> Result<()> {
    let tmp = tempdir()?;
    let event_dir = tmp.path().join("trip");
    std::fs::create_dir(&event_dir)?;
    let file = event_dir.join("trip_001.jpg");
    std::fs::write(&file, b"")?;

    let tagged = add_tags(&file, &["beach", "sunset"])?;
    assert_eq!(tagged, event_dir.join("trip_001[beach sunset].jpg"));
    assert!(tagged.exists());
    assert!(!file.exists());

    // Adding an existing tag changes nothing.
    let same = add_tags(&tagged, &["beach"])?;
    assert_eq!(same, tagged);

    let untagged = remove_tags(&tagged, &["beach"])?;
    assert_eq!(untagged, event_dir.join("trip_001[sunset].jpg"));

    // Removing the last tag drops the bracket segment entirely.
    let bare = remove_tags(&untagged, &["sunset"])?;
    assert_eq!(bare, event_dir.join("trip_001.jpg"));
    Ok(())
}

#[test]
fn tag_edit_rejects_unformatted_files() -> Result<()> {
    let tmp = tempdir()?;
    let event_dir = tmp.path().join("trip");
    std::fs::create_dir(&event_dir)?;
    let file = event_dir.join("snapshot.jpg");
    std::fs::write(&file, b"")?;

    assert!(add_tags(&file, &["beach"]).is_err());
    assert!(file.exists());
    Ok(())
}

#[test]
fn tag_edit_refuses_to_overwrite() -> Result<()> {
    let tmp = tempdir()?;
    let event_dir = tmp.path().join("trip");
    std::fs::create_dir(&event_dir)?;
    let plain = event_dir.join("trip_001.jpg");
    std::fs::write(&plain, b"original")?;
    std::fs::write(event_dir.join("trip_001[beach].jpg"), b"occupied")?;

    assert!(add_tags(&plain, &["beach"]).is_err());
    assert!(plain.exists());
    Ok(())
}
