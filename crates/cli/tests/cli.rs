use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn cefr() -> Command {
    let mut cmd = Command::cargo_bin("cefr").expect("binary");
    cmd.env_remove("CEFR_REMOTE")
        .env_remove("CEFR_REMOTE_URL")
        .env_remove("CEFR_REMOTE_TIMEOUT_MS")
        .env_remove("CEFR_LEXICON");
    cmd
}

fn record(text: &str) -> String {
    format!("id\tdeck\ttype\t{text}\tback\t\t\t\t\t\t\t")
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn word_prints_level() {
    cefr()
        .args(["word", "cat"])
        .assert()
        .success()
        .stdout("A1\n");

    cefr()
        .args(["word", "  Ephemeral "])
        .assert()
        .success()
        .stdout("C2\n");
}

#[test]
fn unknown_word_uses_length_heuristic() {
    cefr()
        .args(["word", "xyzzyplugh"])
        .assert()
        .success()
        .stdout("B2\n");
}

#[test]
fn text_json_includes_token_breakdown() {
    let body = json_stdout(cefr().args(["text", "This is a beautiful day", "--json"]));
    assert_eq!(body["input"], "This is a beautiful day");
    assert_eq!(body["level"], "B2");
    assert_eq!(body["source"], "heuristic");
    let tokens = body["tokens"].as_array().expect("tokens");
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[3]["text"], "beautiful");
}

#[test]
fn file_writes_default_output_next_to_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.txt");
    fs::write(
        &input,
        format!("#separator:tab\n{}\nshort\tline\n", record("cat")),
    )
    .unwrap();

    cefr().arg("file").arg(&input).assert().success();

    let written = fs::read_to_string(dir.path().join("deck_CEFR.txt")).unwrap();
    assert_eq!(
        written,
        format!("#separator:tab\n{}A1\nshort\tline\n", record("cat"))
    );
    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        format!("#separator:tab\n{}\nshort\tline\n", record("cat"))
    );
}

#[test]
fn file_json_reports_stats() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.txt");
    let output = dir.path().join("tagged.txt");
    fs::write(
        &input,
        format!("{}\n{}\n{}\n", record("cat"), record("opinion"), record("dog")),
    )
    .unwrap();

    let body = json_stdout(
        cefr()
            .arg("file")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .args(["--max-entries", "2", "--concurrency", "2", "--json"]),
    );
    assert_eq!(body["lines"], 3);
    assert_eq!(body["annotated"], 2);
    assert_eq!(body["skipped"], 1);
    assert_eq!(body["by_level"]["B1"], 1);

    let written = fs::read_to_string(&output).unwrap();
    let tags: Vec<&str> = written
        .lines()
        .map(|l| l.split('\t').nth(11).unwrap())
        .collect();
    assert_eq!(tags, vec!["A1", "B1", ""]);
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().unwrap();
    cefr()
        .arg("file")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn invalid_layout_is_rejected() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("deck.txt");
    fs::write(&input, record("cat")).unwrap();

    cefr()
        .arg("file")
        .arg(&input)
        .args(["--min-fields", "4"])
        .assert()
        .failure();
    assert!(!dir.path().join("deck_CEFR.txt").exists());

    cefr()
        .arg("file")
        .arg(&input)
        .args(["--concurrency", "18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("concurrency"));
    assert!(!dir.path().join("deck_CEFR.txt").exists());
}

#[test]
fn remote_without_url_is_an_error() {
    cefr()
        .args(["--remote", "word", "cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--remote-url"));
}

#[test]
fn unreachable_remote_falls_back_to_local() {
    cefr()
        .args([
            "--remote",
            "--remote-url",
            "http://127.0.0.1:9/level",
            "--remote-timeout-ms",
            "500",
            "word",
            "xyzzyplugh",
        ])
        .assert()
        .success()
        .stdout("B2\n");
}

#[test]
fn custom_lexicon_replaces_builtin_lists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    fs::write(&path, "A1 = [\"cat\"]\nC1 = [\"Beautiful\"]\n").unwrap();

    cefr()
        .arg("--lexicon")
        .arg(&path)
        .args(["word", "beautiful"])
        .assert()
        .success()
        .stdout("C1\n");

    cefr()
        .env("CEFR_LEXICON", &path)
        .args(["word", "ephemeral"])
        .assert()
        .success()
        .stdout("B2\n");
}

#[test]
fn interactive_stops_at_exit() {
    cefr()
        .arg("interactive")
        .write_stdin("cat\n\nThis is a beautiful day\nexit\nephemeral\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat → A1"))
        .stdout(predicate::str::contains("This is a beautiful day → B2"))
        .stdout(predicate::str::contains("ephemeral").not());
}
