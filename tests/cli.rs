use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

static BIN_UNDER_TEST: &str = "wayback-checker";

fn command() -> Command {
    Command::cargo_bin(BIN_UNDER_TEST).unwrap()
}

#[test]
fn test_empty_input_prints_zero_summary() {
    command()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔍 Checking URLs in Wayback Machine..."))
        .stdout(predicate::str::contains(
            "📊 Summary: 0/0 URLs found in Wayback Machine",
        ))
        .stdout(predicate::str::contains("💡 Tip").not());
}

#[test]
fn test_non_url_lines_make_no_requests() {
    // The endpoint points at a closed port; any request would show up as a failure block
    command()
        .args(["--endpoint", "http://127.0.0.1:1/wayback/available"])
        .write_stdin("\nhello\nexample.com\nftp://example.com\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("NOT FOUND").not())
        .stdout(predicate::str::contains(
            "📊 Summary: 0/0 URLs found in Wayback Machine",
        ));
}

#[test]
fn test_unreachable_endpoint_is_reported_per_url() {
    command()
        .args([
            "--endpoint",
            "http://127.0.0.1:1/wayback/available",
            "--delay-ms",
            "0",
        ])
        .write_stdin("https://example.com\nhttps://example.org\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ NOT FOUND: https://example.com"))
        .stdout(predicate::str::contains("✗ NOT FOUND: https://example.org"))
        .stdout(predicate::str::contains(
            "📊 Summary: 0/2 URLs found in Wayback Machine",
        ));
}

#[test]
fn test_invalid_endpoint_exits_with_error() {
    command()
        .args(["--endpoint", "not a url"])
        .write_stdin("https://example.com\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid availability endpoint"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_archived_url_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wayback/available"))
        .and(query_param("url", "https://example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"archived_snapshots":{"closest":{"available":true,"url":"https://web.archive.org/web/20200101000000/https://example.com","timestamp":"20200101000000","status":"200"}}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let endpoint = format!("{}/wayback/available", server.uri());
    let assert = tokio::task::spawn_blocking(move || {
        command()
            .args(["--endpoint", &endpoint, "--delay-ms", "0"])
            .write_stdin("https://example.com\n")
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("✓ ARCHIVED: https://example.com"))
        .stdout(predicate::str::contains(
            "  └─ Archived on: 2020-01-01 00:00:00",
        ))
        .stdout(predicate::str::contains(
            "📊 Summary: 1/1 URLs found in Wayback Machine",
        ))
        .stdout(predicate::str::contains(
            "💡 Tip: You can visit the archived URLs directly in your browser!",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let endpoint = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        command()
            .args(["--endpoint", &endpoint, "--delay-ms", "0"])
            .write_stdin("https://example.com\n")
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains(
            "✗ NOT FOUND: https://example.com\n  └─ Reason: HTTP 500\n",
        ))
        .stdout(predicate::str::contains(
            "📊 Summary: 0/1 URLs found in Wayback Machine",
        ));
}
