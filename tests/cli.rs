use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Runs the binary with its config dir pointed at `home` so no real settings leak in.
fn generator(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quantum-sentences").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .args(["--offline", "--log-level", "error"]);
    cmd
}

fn write_words(dir: &Path) {
    fs::write(dir.join("nouns.txt"), "cat\n").unwrap();
    fs::write(dir.join("verbs.txt"), "jumps\n").unwrap();
    fs::write(dir.join("adjectives.txt"), "quick\n").unwrap();
    fs::write(dir.join("adverbs.txt"), "quietly\n").unwrap();
    fs::write(dir.join("determiners.txt"), "the\n").unwrap();
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_one_cluster_and_exits_zero() {
    let home = tempfile::tempdir().unwrap();
    let words = tempfile::tempdir().unwrap();
    write_words(words.path());

    let assert = generator(home.path())
        .arg("--words")
        .arg(words.path())
        .args(["--seed", "3"])
        .assert()
        .success();

    let lines = stdout_lines(assert.get_output());
    assert!((4..=20).contains(&lines.len()), "{} lines", lines.len());
    for line in &lines {
        assert!(line.ends_with(['.', '!', '?']), "{:?}", line);
    }
}

#[test]
fn plain_flag_prints_canonical_sentences() {
    let home = tempfile::tempdir().unwrap();
    let words = tempfile::tempdir().unwrap();
    write_words(words.path());

    let assert = generator(home.path())
        .arg("--words")
        .arg(words.path())
        .arg("--plain")
        .assert()
        .success();

    let lines = stdout_lines(assert.get_output());
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|l| l == "The quick cat jumps quietly."));
}

#[test]
fn missing_word_lists_fail_with_message() {
    let home = tempfile::tempdir().unwrap();
    let words = tempfile::tempdir().unwrap();

    let assert = generator(home.path())
        .arg("--words")
        .arg(words.path())
        .assert()
        .failure();

    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "{}", stderr);
    assert!(stderr.contains("word list not found"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_word_list_fails_with_message() {
    let home = tempfile::tempdir().unwrap();
    let words = tempfile::tempdir().unwrap();
    write_words(words.path());
    fs::write(words.path().join("verbs.txt"), "\n# none\n").unwrap();

    let assert = generator(home.path())
        .arg("--words")
        .arg(words.path())
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("word list is empty"), "{}", stderr);
}

#[test]
fn help_describes_every_flag() {
    let home = tempfile::tempdir().unwrap();
    let assert = Command::cargo_bin("quantum-sentences")
        .unwrap()
        .env("HOME", home.path())
        .arg("--help")
        .assert()
        .success();

    let help = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(help.contains("Seconds to wait for the QRNG before falling back"), "{}", help);
    assert!(help.contains("Log filter level"), "{}", help);
    assert!(help.contains("Use local pseudo-randomness only"), "{}", help);
}
