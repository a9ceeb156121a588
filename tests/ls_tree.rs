use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::repository_dir;

/// Snapshot the repository and hand back the root tree id.
fn write_tree(repository: &TempDir) -> String {
    let output = common::run_rit_command(repository.path(), &["write-tree"])
        .assert()
        .success();
    String::from_utf8(output.get_output().stdout.clone()).expect("tree id is not UTF-8")
}

#[rstest]
fn lists_a_single_entry_with_mode_kind_and_id(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("a.txt").write_str("hi\n")?;
    let tree_oid = write_tree(&repository_dir);

    let blob_oid = common::blob_oid(b"hi\n");
    common::run_rit_command(repository_dir.path(), &["ls-tree", &tree_oid])
        .assert()
        .success()
        .stdout(predicate::eq(format!("100644 blob {blob_oid}\ta.txt\n")));

    Ok(())
}

#[rstest]
fn name_only_prints_names_in_stored_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("b.txt").write_str("b")?;
    repository_dir.child("a").child("nested.txt").write_str("n")?;
    let tree_oid = write_tree(&repository_dir);

    common::run_rit_command(repository_dir.path(), &["ls-tree", "--name-only", &tree_oid])
        .assert()
        .success()
        .stdout(predicate::eq("a\nb.txt\n"));

    Ok(())
}

#[rstest]
fn directories_are_listed_as_trees(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("sub/file.txt").write_str("content")?;
    let tree_oid = write_tree(&repository_dir);

    common::run_rit_command(repository_dir.path(), &["ls-tree", &tree_oid])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^40000 tree [0-9a-f]{40}\tsub\n$",
        )?);

    Ok(())
}

#[rstest]
fn recursive_listing_prints_full_paths(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("1.txt").write_str("one")?;
    repository_dir.child("a/2.txt").write_str("two")?;
    repository_dir.child("a/b/3.txt").write_str("three")?;
    let tree_oid = write_tree(&repository_dir);

    common::run_rit_command(
        repository_dir.path(),
        &["ls-tree", "-r", "--name-only", &tree_oid],
    )
    .assert()
    .success()
    .stdout(predicate::eq("1.txt\na/2.txt\na/b/3.txt\n"));

    Ok(())
}

#[rstest]
fn listing_a_blob_is_an_error(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("a.txt").write_str("hi\n")?;
    common::run_rit_command(repository_dir.path(), &["hash-object", "a.txt"])
        .assert()
        .success();

    common::run_rit_command(
        repository_dir.path(),
        &["ls-tree", &common::blob_oid(b"hi\n")],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("not a tree"));

    Ok(())
}

#[rstest]
fn empty_tree_lists_nothing(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let tree_oid = write_tree(&repository_dir);

    common::run_rit_command(repository_dir.path(), &["ls-tree", &tree_oid])
        .assert()
        .success()
        .stdout(predicate::eq(""));

    Ok(())
}
