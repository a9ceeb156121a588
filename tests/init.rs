use predicates::prelude::predicate;

mod common;

#[test]
fn init_creates_repository_layout() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut sut = common::run_rit_command(dir.path(), &["init"]);

    sut.assert().success().stdout(predicate::str::is_match(
        r"^Initialized empty Git repository in .+$",
    )?);

    let git_dir = dir.path().join(".git");
    let head = std::fs::read_to_string(git_dir.join("HEAD"))?;
    pretty_assertions::assert_eq!(head, "ref: refs/heads/main\n");

    // objects/ and refs/ exist and start out empty
    assert_eq!(std::fs::read_dir(git_dir.join("objects"))?.count(), 0);
    assert_eq!(std::fs::read_dir(git_dir.join("refs"))?.count(), 0);

    Ok(())
}

#[test]
fn init_accepts_a_path_argument() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let repository_path = dir.path().join("nested").join("repo");

    let mut sut = common::run_rit_command(dir.path(), &["init", repository_path.to_str().unwrap()]);
    sut.assert().success();

    assert!(repository_path.join(".git").join("objects").is_dir());
    assert!(repository_path.join(".git").join("refs").is_dir());
    let head = std::fs::read_to_string(repository_path.join(".git").join("HEAD"))?;
    pretty_assertions::assert_eq!(head, "ref: refs/heads/main\n");

    Ok(())
}

#[test]
fn init_twice_keeps_the_layout() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;

    common::run_rit_command(dir.path(), &["init"])
        .assert()
        .success();
    common::run_rit_command(dir.path(), &["init"])
        .assert()
        .success();

    let head = std::fs::read_to_string(dir.path().join(".git").join("HEAD"))?;
    pretty_assertions::assert_eq!(head, "ref: refs/heads/main\n");

    Ok(())
}
