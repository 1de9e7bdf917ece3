use std::error::Error;
use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

fn listclone_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_listclone"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(listclone_command().args(args).output()?)
}

#[test]
fn cli_hash_prints_digest() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("empty.txt");
    fs::write(&file, b"")?;

    let hash = run(&["hash", file.to_str().unwrap()])?;
    assert!(
        hash.status.success(),
        "hash command failed: {}",
        String::from_utf8_lossy(&hash.stderr)
    );
    let stdout = String::from_utf8(hash.stdout)?;
    assert!(stdout.contains("Hash for"), "missing confirmation prefix");
    assert!(
        stdout.contains("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"),
        "missing empty-file digest: {}",
        stdout
    );

    Ok(())
}

#[test]
fn cli_archive_extract_roundtrip() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let src = dir.path().join("proj");
    fs::create_dir(&src)?;
    fs::write(src.join("a.txt"), b"hello")?;
    fs::create_dir(src.join("sub"))?;
    fs::write(src.join("sub").join("b.txt"), b"world")?;

    let archive = dir.path().join("out.lcone");
    let dest = dir.path().join("dest");

    let create = run(&["archive", src.to_str().unwrap(), archive.to_str().unwrap()])?;
    assert!(
        create.status.success(),
        "archive command failed: {}",
        String::from_utf8_lossy(&create.stderr)
    );
    assert!(
        String::from_utf8(create.stdout)?.contains("Created"),
        "archive output missing confirmation"
    );
    assert!(archive.exists(), "archive file should exist");

    let extract = run(&["extract", archive.to_str().unwrap(), dest.to_str().unwrap()])?;
    assert!(
        extract.status.success(),
        "extract command failed: {}",
        String::from_utf8_lossy(&extract.stderr)
    );
    assert!(
        String::from_utf8(extract.stdout)?.contains("Extracted"),
        "extract output missing confirmation"
    );

    assert_eq!(fs::read(dest.join("proj").join("a.txt"))?, b"hello");
    assert_eq!(fs::read(dest.join("proj").join("sub").join("b.txt"))?, b"world");

    Ok(())
}

#[test]
fn cli_no_command_shows_help() -> Result<(), Box<dyn Error>> {
    let help = run(&[])?;
    assert!(help.status.success(), "bare invocation should exit 0");
    let stdout = String::from_utf8(help.stdout)?;
    assert!(stdout.contains("Usage"), "help output missing usage: {}", stdout);

    Ok(())
}

#[test]
fn cli_missing_file_fails_cleanly() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let absent = dir.path().join("nonexistent");

    let hash = run(&["hash", absent.to_str().unwrap()])?;
    assert!(!hash.status.success(), "hashing a missing file should fail");
    assert!(
        !String::from_utf8(hash.stdout)?.contains("Hash for"),
        "no digest line should be printed on failure"
    );
    assert!(
        String::from_utf8(hash.stderr)?.contains("Error:"),
        "failure should print a single error line"
    );

    Ok(())
}

#[test]
fn cli_command_aliases() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("data.txt");
    fs::write(&file, b"aliased")?;

    let hash = run(&["h", file.to_str().unwrap()])?;
    assert!(hash.status.success(), "alias 'h' should work");
    assert!(String::from_utf8(hash.stdout)?.contains("Hash for"));

    Ok(())
}
