use crate::*;
use predicates::prelude::*;
use signer_alerts::error::Result;

pub fn tests(tests: &mut Vec<Trial>) {
    tests.extend(trials!(
        test_risk_acknowledged,
        test_risk_declined_goes_back,
        test_multipart_uses_fixed_message,
        test_decode_failure_is_informational,
        test_backup_done_proceeds
    ));
}

fn test_risk_acknowledged() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "-y", "risk", "Unknown network"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Warning ==\nUnknown network\n"))
        .stdout(predicate::str::ends_with("-> I understand the risks\n"));
    Ok(())
}

fn test_risk_declined_goes_back() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "risk", "Unknown network"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("  [cancel] Back\n"))
        .stdout(predicate::str::ends_with("-> Back\n"));
    Ok(())
}

fn test_multipart_uses_fixed_message() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "-y", "multipart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("too big to be decoded"))
        .stdout(predicate::str::contains("multipart support"));
    Ok(())
}

fn test_decode_failure_is_informational() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "decode-failure"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "== Could not decode method with available metadata. ==",
        ))
        .stdout(predicate::str::contains("  [default] Okay\n"))
        .stdout(predicate::str::ends_with("-> Okay\n"));
    Ok(())
}

fn test_backup_done_proceeds() -> Result<()> {
    signer_alerts_cmd()
        .args(["--non-interactive", "--assume-yes", "backup-done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Important =="))
        .stdout(predicate::str::ends_with("-> Proceed\n"));

    signer_alerts_cmd()
        .args(["--non-interactive", "backup-done"])
        .assert()
        .code(3)
        .stdout(predicate::str::ends_with("-> Cancel\n"));
    Ok(())
}
