// webpmirror-core/tests/discovery_tests.rs

use std::fs::{self, File};
use std::path::PathBuf;

use tempfile::tempdir;
use webpmirror_core::discovery::find_all_files;
use webpmirror_core::error::CoreError;

#[test]
fn test_find_all_files_is_recursive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input_dir = dir.path();

    File::create(input_dir.join("photo.png"))?;
    File::create(input_dir.join("notes.txt"))?; // discovery does not filter by extension
    fs::create_dir_all(input_dir.join("a").join("b"))?;
    File::create(input_dir.join("a").join("banner.jpg"))?;
    File::create(input_dir.join("a").join("b").join("icon.svg"))?;

    let mut files = find_all_files(input_dir)?;
    files.sort();

    assert_eq!(files.len(), 4);
    assert!(files.iter().any(|f| f.ends_with("notes.txt")));
    assert!(files.iter().any(|f| f.ends_with("a/b/icon.svg")));

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_all_files_empty_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    let files = find_all_files(dir.path())?;
    assert!(files.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_all_files_skips_directories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("only_a_dir"))?;

    let files = find_all_files(dir.path())?;
    assert!(files.is_empty());

    dir.close()?;
    Ok(())
}

#[test]
fn test_find_all_files_nonexistent_dir() {
    let non_existent_path = PathBuf::from("surely_this_does_not_exist_42_integration");
    let result = find_all_files(&non_existent_path);
    assert!(result.is_err());
    match result.err().unwrap() {
        CoreError::Walkdir(_) => {}
        e => panic!("Unexpected error type: {:?}", e),
    }
}
