mod common;

use common::{products_json, stderr, stdout, CliHarness};

#[test]
fn test_products_prints_first_page() {
    let harness = CliHarness::new().serve(200, &products_json(10));

    let output = harness.run(&["products"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "#1  Product 1  $1.25");
    assert_eq!(lines[5], "#6  Product 6  $6.25");
    assert_eq!(lines[6], "showing 6 of 10");
}

#[test]
fn test_products_reveals_more_pages() {
    let harness = CliHarness::new().serve(200, &products_json(10));

    let output = harness.run(&["products", "--pages", "3"]);

    let text = stdout(&output);
    assert!(text.contains("#10  Product 10  $10.25"));
    assert_eq!(text.lines().last(), Some("showing 10 of 10"));
}

#[test]
fn test_products_accepts_wrapped_shape() {
    let bare = CliHarness::new().serve(200, &products_json(4));
    let wrapped = CliHarness::new().serve(
        200,
        &format!(r#"{{"status":"SUCCESS","products":{}}}"#, products_json(4)),
    );

    let bare_output = bare.run(&["products"]);
    let wrapped_output = wrapped.run(&["products"]);

    assert!(wrapped_output.status.success());
    assert_eq!(stdout(&bare_output), stdout(&wrapped_output));
    assert!(stdout(&wrapped_output).ends_with("showing 4 of 4\n"));
}

#[test]
fn test_products_rejects_unknown_shape() {
    let harness = CliHarness::new().serve(200, r#"{"foo": 1}"#);

    let output = harness.run(&["products"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Invalid data format received from API"));
}

#[test]
fn test_products_reports_server_error() {
    let harness = CliHarness::new().serve(500, "oops");

    let output = harness.run(&["products"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to fetch products"));
}

#[test]
fn test_products_reports_unreachable_endpoint() {
    let harness = CliHarness::new();

    let output = harness.run(&[
        "--endpoint",
        "http://127.0.0.1:9/api/products",
        "--timeout-secs",
        "2",
        "products",
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to fetch products"));
}

#[test]
fn test_products_rejects_zero_pages() {
    let harness = CliHarness::new().serve(200, &products_json(10));

    let output = harness.run(&["products", "--pages", "0"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("--pages"));
}
