use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

#[test]
fn test_cli_remote_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("commute-pay"));
    cmd.write_stdin("100000\nremote\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter total monthly salary (in currency units): ",
        ))
        .stdout(predicate::str::contains(
            "Do you work remotely or in office? (enter 'remote' or 'office'): ",
        ))
        .stdout(predicate::str::contains(
            "An average month has 21.8 working days.",
        ))
        .stdout(predicate::str::contains(
            "Your pay for one hour of remote work: 573.39",
        ))
        .stdout(predicate::str::contains("office work").not());

    Ok(())
}

#[test]
fn test_cli_office_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("commute-pay"));
    cmd.write_stdin("100000\noffice\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "An average month has 21.8 working days.",
        ))
        .stdout(predicate::str::contains(
            "Your actual pay for one hour of office work (including commute): 458.72",
        ))
        .stdout(predicate::str::contains(
            "To match your remote hourly rate, your salary should be: 125000.00",
        ))
        .stdout(predicate::str::contains(
            "Extra pay owed for the additional hours: 25000.00",
        ));

    Ok(())
}

#[test]
fn test_cli_remote_spellings_match() {
    let run = |mode: &str| {
        Command::new(cargo_bin!("commute-pay"))
            .write_stdin(format!("64000\n{mode}\n"))
            .output()
            .unwrap()
    };

    let expected = run("remote");
    assert!(expected.status.success());
    for mode in ["Remote", "  REMOTELY  ", "remotely"] {
        assert_eq!(run(mode).stdout, expected.stdout);
    }
}

#[test]
fn test_cli_is_idempotent() {
    let run = || {
        Command::new(cargo_bin!("commute-pay"))
            .write_stdin("98765.43\noffice\n")
            .output()
            .unwrap()
    };

    assert_eq!(run().stdout, run().stdout);
}

#[test]
fn test_cli_flags_skip_prompts() {
    let mut cmd = Command::new(cargo_bin!("commute-pay"));
    cmd.args(["--salary", "100000", "--mode", "office"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter total monthly salary").not())
        .stdout(predicate::str::contains("Do you work remotely").not())
        .stdout(predicate::str::contains("125000.00"));
}

#[test]
fn test_cli_json_format() -> Result<(), Box<dyn std::error::Error>> {
    let output = Command::new(cargo_bin!("commute-pay"))
        .args(["--salary", "100000", "--mode", "office", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["mode"], "office");
    assert_eq!(value["working_days"], "21.8");
    assert_eq!(value["office_hourly_payment"], "458.72");
    assert_eq!(value["required_salary"], "125000.00");
    assert_eq!(value["extra_payment"], "25000.00");

    Ok(())
}

#[test]
fn test_cli_json_pads_exact_figures() -> Result<(), Box<dyn std::error::Error>> {
    // 1744 / 174.4 and 1744 / 218 both divide exactly.
    let output = Command::new(cargo_bin!("commute-pay"))
        .args(["--salary", "1744", "--mode", "office", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["office_hourly_payment"], "8.00");
    assert_eq!(value["required_salary"], "2180.00");
    assert_eq!(value["extra_payment"], "436.00");

    Ok(())
}
