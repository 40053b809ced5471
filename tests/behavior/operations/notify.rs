use crate::*;
use predicates::prelude::*;
use signer_alerts::error::Result;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_error_with_message,
        test_error_preset,
        test_error_requires_message_or_preset,
        test_json_describes_without_answering
    ));
}

fn test_error_with_message() -> Result<()> {
    signer_alerts_cmd()
        .args([
            "--non-interactive",
            "error",
            "Network unreachable",
            "--dismiss-label",
            "Close",
        ])
        .assert()
        .success()
        .stdout("== Error ==\nNetwork unreachable\n  [cancel] Close\n-> Close\n");
    Ok(())
}

fn test_error_preset() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "error", "--preset", "identity-creation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Can't create Identity from the seed"))
        .stdout(predicate::str::contains("  [cancel] Try again\n"));
    Ok(())
}

fn test_error_requires_message_or_preset() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "error"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
    Ok(())
}

fn test_json_describes_without_answering() -> Result<()> {
    let assert = signer_alerts_cmd()
        .args(["--json", "delete-account", "Carol"])
        .assert()
        .code(3);
    let out = stdout_of(assert.get_output());
    let value: serde_json::Value = serde_json::from_str(out.trim())?;

    assert_eq!(value["title"], "Delete Account");
    assert_eq!(value["body"], "Do you really want to delete Carol?");
    assert_eq!(value["actions"][0]["label"], "Delete");
    assert_eq!(value["actions"][0]["kind"], "destructive");
    assert_eq!(value["actions"][0]["has_callback"], true);
    assert_eq!(value["actions"][1]["kind"], "cancel");
    assert_eq!(value["actions"][1]["has_callback"], false);
    Ok(())
}
