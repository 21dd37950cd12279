use std::io::Write;
use std::process::Command as Process;

use assert_cmd::prelude::*;
use clap::Parser;
use predicates::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;

use storefront_cli::{Cli, Command, SelectionArgs, execute, load_product};

const SNEAKER_JSON: &str = r##"{
    "id": "0190b6b2-8c4e-7c1a-9e4b-3f1d2c3b4a59",
    "name": "Court Runner",
    "colors": [
        { "color": "Black", "stock": 5, "hexcode": "#000000", "images": ["black-1.jpg"] },
        { "color": "White", "stock": 0, "hexcode": "#ffffff" }
    ],
    "sizes": [
        { "size": "9", "stock": 3 },
        { "size": "10", "stock": 0 }
    ]
}"##;

fn product_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn storefront() -> Process {
    let mut cmd = Process::cargo_bin("storefront").unwrap();
    cmd.env("RUST_LOG", "error").env_remove("STOREFRONT_PRODUCT");
    cmd
}

fn selection(color: Option<&str>, size: Option<&str>) -> SelectionArgs {
    SelectionArgs {
        color: color.map(str::to_string),
        size: size.map(str::to_string),
    }
}

#[test]
fn parses_global_product_before_subcommand() {
    let cli = Cli::try_parse_from([
        "storefront",
        "--product",
        "p.json",
        "validate",
        "--color",
        "Black",
    ])
    .unwrap();
    assert_eq!(cli.product.to_str(), Some("p.json"));
    assert_eq!(cli.command, Command::Validate(selection(Some("Black"), None)));
}

#[test]
fn sizes_command_lists_every_size() {
    let file = product_file(SNEAKER_JSON);
    let product = load_product(file.path()).unwrap();

    let outcome = execute(&Command::Sizes { color: "Black".into() }, &product).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert_eq!(
        outcome.output,
        json!([
            { "size": "9", "stock": 3, "availableStock": 3, "isAvailable": true },
            { "size": "10", "stock": 0, "availableStock": 0, "isAvailable": false }
        ])
    );
}

#[test]
fn stock_command_reports_lookup_outcome() {
    let product = load_product(product_file(SNEAKER_JSON).path()).unwrap();

    let outcome = execute(&Command::Stock(selection(Some("Red"), Some("9"))), &product).unwrap();
    assert_eq!(outcome.output["stock"], 0);
    assert_eq!(outcome.output["available"], false);
    assert_eq!(outcome.output["lookup"], json!({ "outcome": "unknown_color", "value": "Red" }));

    let outcome = execute(&Command::Stock(selection(Some("Black"), Some("9"))), &product).unwrap();
    assert_eq!(outcome.output["stock"], 3);
}

#[test]
fn validate_command_sets_exit_code() {
    let product = load_product(product_file(SNEAKER_JSON).path()).unwrap();

    let invalid = execute(&Command::Validate(selection(None, None)), &product).unwrap();
    assert_eq!(invalid.exit_code, 2);
    assert_eq!(invalid.output["message"], "Please select a color");

    let valid = execute(&Command::Validate(selection(Some("Black"), Some("9"))), &product).unwrap();
    assert_eq!(valid.exit_code, 0);
    assert_eq!(valid.output["isValid"], true);
}

#[test]
fn load_product_surfaces_ingestion_errors() {
    let file = product_file(
        r#"{ "id": "0190b6b2-8c4e-7c1a-9e4b-3f1d2c3b4a59", "name": "Dup",
             "sizes": [{ "size": "9", "stock": 1 }, { "size": "9", "stock": 2 }] }"#,
    );
    let err = load_product(file.path()).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("invalid product record"));
    assert!(chain.contains("duplicate size '9'"));
}

#[test]
fn binary_prints_combinations() {
    let file = product_file(SNEAKER_JSON);
    storefront()
        .arg("--product")
        .arg(file.path())
        .args(["--compact", "combinations"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r##""colorHexcode":"#000000""##)
                .and(predicate::str::contains(r#""size":"9""#))
                .and(predicate::str::contains(r#""stock":3"#))
                .and(predicate::str::contains("White").not()),
        );
}

#[test]
fn binary_reads_product_path_from_env() {
    let file = product_file(SNEAKER_JSON);
    storefront()
        .env("STOREFRONT_PRODUCT", file.path())
        .args(["colors", "--size", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"White\""));
}

#[test]
fn binary_exits_2_for_out_of_stock_selection() {
    let file = product_file(SNEAKER_JSON);
    storefront()
        .arg("--product")
        .arg(file.path())
        .args(["validate", "--color", "Black", "--size", "10"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Black / 10 is out of stock"));
}

#[test]
fn binary_fails_on_missing_file() {
    storefront()
        .args(["--product", "/nonexistent/product.json", "combinations"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read product file"));
}
