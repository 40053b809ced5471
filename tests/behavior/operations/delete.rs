use crate::*;
use predicates::prelude::*;
use signer_alerts::error::Result;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_delete_account_declined_by_default,
        test_delete_account_accepted,
        test_delete_legacy_account_mentions_recovery_phrase,
        test_delete_identity_dismissed,
        test_confirm_custom_label,
        test_console_without_terminal_fails
    ));
}

fn test_delete_account_declined_by_default() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "delete-account", "Alice"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("== Delete Account =="))
        .stdout(predicate::str::contains("Do you really want to delete Alice?"))
        .stdout(predicate::str::contains("  [destructive] Delete\n  [cancel] Cancel\n"))
        .stdout(predicate::str::ends_with("-> Cancel\n"));
    Ok(())
}

fn test_delete_account_accepted() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "--assume-yes", "delete-account", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("-> Delete\n"));
    Ok(())
}

fn test_delete_legacy_account_mentions_recovery_phrase() -> Result<()> {
    let assert = signer_alerts_cmd()
        .args(["--non-interactive", "delete-account", "--legacy", "Bob"])
        .assert()
        .code(3);
    let out = stdout_of(assert.get_output());

    assert!(out.contains(
        "Do you really want to delete Bob?\nThe account can only be recovered with its associated recovery phrase."
    ));
    Ok(())
}

fn test_delete_identity_dismissed() -> Result<()> {
    signer_alerts_cmd()
        .env("SIGNER_ALERTS_ANSWER", "dismiss")
        .args(["--non-interactive", "delete-identity"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("== Delete Identity =="))
        .stdout(predicate::str::ends_with("-> (dismissed)\n"));
    Ok(())
}

fn test_confirm_custom_label() -> Result<()> {
    signer_alerts_cmd()
        .args([
            "--non-interactive",
            "-y",
            "confirm",
            "Remove network",
            "Remove this network from the list?",
            "--confirm-label",
            "Remove",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Remove network =="))
        .stdout(predicate::str::contains("  [destructive] Remove\n"))
        .stdout(predicate::str::ends_with("-> Remove\n"));
    Ok(())
}

fn test_console_without_terminal_fails() -> Result<()> {
    // Output is captured, so the console presenter has no terminal to prompt on.
    signer_alerts_cmd()
        .args(["delete-account", "Alice"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Prompt failed"));
    Ok(())
}
