use predicates::prelude::*;

mod common;
use common::TestEnv;

#[test]
fn test_tools_lists_every_tool() {
    let env = TestEnv::new();
    env.cmd()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("create_word_document"))
        .stdout(predicate::str::contains("read_document_content"))
        .stdout(predicate::str::contains("add_paragraph"))
        .stdout(predicate::str::contains("add_heading"))
        .stdout(predicate::str::contains("list_available_word_documents"))
        .stdout(predicate::str::contains("health_check"));
}

#[test]
fn test_call_health_check_without_args() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "health_check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MCP Word Service is up and running!"));
}

#[test]
fn test_call_create_then_read() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "create_document", "--args"])
        .arg(r#"{"filename": "memo", "title": "Memo"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Document created: "));

    env.cmd()
        .args(["call", "read_document_content", "--args"])
        .arg(r#"{"filename": "memo.docx"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Memo"));
}

#[test]
fn test_call_tool_error_exits_nonzero() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "create_document", "--args"])
        .arg(r#"{"filename": "dup"}"#)
        .assert()
        .success();

    env.cmd()
        .args(["call", "create_document", "--args"])
        .arg(r#"{"filename": "dup"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: File 'dup.docx' already exists.",
        ));
}

#[test]
fn test_call_empty_listing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "list_available_word_documents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No .docx files found."));
}

#[test]
fn test_call_rejects_malformed_args_json() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "add_paragraph", "--args", "{oops"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_call_unknown_tool() {
    let env = TestEnv::new();
    env.cmd()
        .args(["call", "delete_everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool: delete_everything"));
}
