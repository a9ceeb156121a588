#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use sha1::{Digest, Sha1};
use std::io::Read;
use std::path::Path;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

pub fn run_rit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("rit").expect("Failed to find rit binary");
    cmd.current_dir(dir).args(args);
    cmd
}

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    let dir = TempDir::new().expect("Failed to create temp dir");

    run_rit_command(dir.path(), &["init"]).assert().success();

    dir
}

/// Hex SHA-1 of arbitrary bytes.
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Raw SHA-1 digest of arbitrary bytes.
pub fn sha1_digest(data: &[u8]) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Frame a payload the way the object store does: `<kind> <size>\0<payload>`.
pub fn framed(kind: &str, payload: &[u8]) -> Vec<u8> {
    let mut framed = format!("{kind} {}\0", payload.len()).into_bytes();
    framed.extend_from_slice(payload);
    framed
}

/// The object id a blob with this content gets.
pub fn blob_oid(content: &[u8]) -> String {
    sha1_hex(&framed("blob", content))
}

/// One serialized tree entry: `<mode> <name>\0<20-byte child digest>`.
pub fn tree_entry(mode: &str, name: &str, child_framed: &[u8]) -> Vec<u8> {
    let mut entry = format!("{mode} {name}\0").into_bytes();
    entry.extend_from_slice(&sha1_digest(child_framed));
    entry
}

/// Read an object file from the store and inflate it back to framed bytes.
pub fn read_object_file(repository: &Path, oid: &str) -> Vec<u8> {
    let object_path = repository
        .join(".git")
        .join("objects")
        .join(&oid[..2])
        .join(&oid[2..]);
    let compressed = std::fs::read(&object_path)
        .unwrap_or_else(|_| panic!("missing object file {}", object_path.display()));

    let mut decoder = flate2::read::ZlibDecoder::new(compressed.as_slice());
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .expect("object file is not a zlib stream");
    inflated
}
