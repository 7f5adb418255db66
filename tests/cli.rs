//! E2E tests for the lsd command line

use std::process::Command;

/// Test tallying a single guinea from the command line
#[test]
fn tally_one_guinea() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["tally", "--coin", "guinea=1"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.trim(), "£1/1/–");
}

/// Test fractional coins are carried and the remainder kept
#[test]
fn tally_fractional_coins() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args([
            "tally",
            "-c",
            "shillings=10",
            "-c",
            "pennies=16",
            "-c",
            "halfpennies=5",
            "-c",
            "farthings=5",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.trim(), "/11/7.75");
}

/// Test one price per CSV row plus a grand total
#[test]
fn tally_csv_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["tally", "-f", "tests/data/purses.csv"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines, vec!["/11/7.75", "£1/1/–", "Total: £1/12/7.75"]);
}

/// Test JSON input and output
#[test]
fn tally_json_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["tally", "-f", "tests/data/purses.json", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    let purses = json["purses"].as_array().expect("purses array");
    assert_eq!(purses.len(), 2);
    assert_eq!(purses[0]["display"], "£1/1/–");
    assert_eq!(purses[1]["display"], "/8/–");
    assert_eq!(purses[1]["total_pence"], "96");
    assert_eq!(json["total"]["display"], "£1/9/–");
    assert_eq!(json["total"]["total_shillings"], 29);
}

/// Test unknown coins are reported as errors
#[test]
fn tally_unknown_coin() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["tally", "--coin", "groat=1"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("unknown denomination: groat"), "{}", stderr);
}

/// Test very large counts tally without overflow
#[test]
fn tally_large_counts() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args([
            "tally",
            "-c",
            "pennies=9223372036854775807",
            "-c",
            "sixpences=9223372036854775807",
        ])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    // 7 * (2^63 - 1) pence
    assert_eq!(stdout.trim(), "£269015017741597627/14/1");
}

/// Test a price too large to hold in pounds is an error, not a crash
#[test]
fn tally_out_of_range() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["tally", "-c", "guineas=9223372036854775807"])
        .output()
        .expect("Failed to execute command");

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Price out of range"), "{}", stderr);
    assert!(!stderr.contains("panicked"), "{}", stderr);
}

/// Test rendering a hand-built price with and without normalization
#[test]
fn show_price() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["show", "0", "5", "0"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.lines().next(), Some("/5/–"));
    assert!(stdout.contains("Total shillings: 5"));
    assert!(stdout.contains("Total pence: 60"));
}

/// Test show leaves a hand-built price alone unless asked to normalize
#[test]
fn show_normalize() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["show", "0", "20", "12"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.lines().next(), Some("/20/12"));

    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["show", "0", "20", "12", "--normalize"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(stdout.lines().next(), Some("£1/1/–"));
}

/// Test the denominations listing
#[test]
fn coins_csv() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["coins", "--csv"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert!(stdout.starts_with("name,value,pence"));
    assert!(stdout.contains("guinea,£1/1/–,252"));
    assert!(stdout.contains("half-crown,/2/6,30"));
    assert!(stdout.contains("farthing,0.25d.,0.25"));
}

/// Test the CSV header matches the purse fields
#[test]
fn schema_csv_header() {
    let output = Command::new(env!("CARGO_BIN_EXE_lsd"))
        .args(["schema", "csv-header"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);
    assert_eq!(
        stdout.trim(),
        "guineas,pounds,sovereigns,half_sovereigns,crowns,half_crowns,florins,shillings,\
         sixpences,threepences,pennies,halfpennies,farthings"
    );
}
