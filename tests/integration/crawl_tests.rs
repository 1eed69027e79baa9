//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full discover-convert-write cycle end-to-end.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use sumi_scribe::config::Config;
use sumi_scribe::convert::{ConvertError, ConvertResult, HtmdConverter, MarkupConverter};
use sumi_scribe::crawler::Coordinator;
use sumi_scribe::storage::FsStore;
use sumi_scribe::{PageOutcome, ScribeError};
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Folder name for the mock server's host (127.0.0.1)
const FOLDER: &str = "127_0_0_1";

/// Creates a test configuration writing under `dir`
fn create_test_config(dir: &TempDir, max_concurrent_pages: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_concurrent_pages = max_concurrent_pages;
    config.crawler.request_timeout_secs = 5;
    config.output.root_dir = dir.path().display().to_string();
    config
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.to_string())
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_response(body))
        .mount(server)
        .await;
}

/// Reads every file in the output folder into name -> content
fn read_output(dir: &TempDir) -> BTreeMap<String, String> {
    let folder = dir.path().join(FOLDER);
    std::fs::read_dir(&folder)
        .expect("output folder missing")
        .map(|entry| {
            let entry = entry.unwrap();
            let name = entry.file_name().to_string_lossy().to_string();
            let content = std::fs::read_to_string(entry.path()).unwrap();
            (name, content)
        })
        .collect()
}

/// Mounts a small site: home links to about, docs/intro, an external
/// page and a duplicate of about
async fn mount_site(server: &MockServer) {
    mount_page(
        server,
        "/",
        r#"<html><head><title>Home</title></head><body>
            <h1>Welcome</h1>
            <a href="/about">About</a>
            <a href="https://other.example/x">Elsewhere</a>
            <a href="docs/intro">Intro</a>
            <a href="/about">About again</a>
        </body></html>"#,
    )
    .await;
    mount_page(
        server,
        "/about",
        "<html><body><h2>About us</h2><p>We <strong>build</strong> things.</p></body></html>",
    )
    .await;
    mount_page(
        server,
        "/docs/intro",
        "<html><body><h1>Intro</h1><ul><li>one</li><li>two</li></ul></body></html>",
    )
    .await;
}

#[tokio::test]
async fn test_full_crawl_single_origin() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator
        .run(&format!("{}/", server.uri()))
        .await
        .expect("crawl failed");

    let addresses: Vec<String> = report
        .pages
        .iter()
        .map(|p| p.address.path().to_string())
        .collect();
    assert_eq!(addresses, vec!["/", "/about", "/docs/intro"]);
    assert!(report.is_complete_success());
    assert_eq!(report.folder, FOLDER);

    let files = read_output(&dir);
    assert_eq!(
        files.keys().cloned().collect::<Vec<_>>(),
        vec!["_about.md", "_docs_intro.md", "_index.md"]
    );
    assert!(files["_index.md"].contains("# Welcome"));
    assert!(files["_about.md"].contains("**build**"));
    assert!(files["_docs_intro.md"].contains("# Intro"));
}

#[tokio::test]
async fn test_each_address_fetched_once_in_conversion() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Seed is fetched once for discovery and once for conversion
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            r#"<a href="/a">A</a><a href="/b">B</a><a href="/a">A</a><a href="/">Home</a>"#,
        ))
        .expect(2)
        .mount(&server)
        .await;
    for route in ["/a", "/b"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(html_response("<p>page</p>"))
            .expect(1)
            .mount(&server)
            .await;
    }

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    assert_eq!(report.pages.len(), 3);
    assert_eq!(report.saved_count(), 3);
    server.verify().await;
}

#[tokio::test]
async fn test_partial_failure_continues() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(
        &server,
        "/",
        r#"<a href="/broken">Broken</a><a href="/fine">Fine</a><a href="/missing">Missing</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/fine", "<p>still here</p>").await;
    // /missing has no mock and answers 404

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    assert_eq!(report.pages.len(), 4);
    assert_eq!(report.saved_count(), 2);
    assert_eq!(report.failed_count(), 2);

    let failures: Vec<(String, String)> = report
        .failures()
        .map(|(url, reason)| (url.path().to_string(), reason.to_string()))
        .collect();
    assert_eq!(failures[0].0, "/broken");
    assert!(failures[0].1.contains("HTTP 500"));
    assert_eq!(failures[1].0, "/missing");
    assert!(failures[1].1.contains("HTTP 404"));

    let files = read_output(&dir);
    assert!(files.contains_key("_index.md"));
    assert!(files.contains_key("_fine.md"));
    assert!(!files.contains_key("_broken.md"));
}

#[tokio::test]
async fn test_seed_fetch_failure_is_graceful() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.pages[0].address.as_str(), format!("{}/", server.uri()));
    assert!(!report.pages[0].outcome.is_saved());
    assert!(read_output(&dir).is_empty());
}

#[tokio::test]
async fn test_seed_network_error_is_graceful() {
    let dir = TempDir::new().unwrap();

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator.run("http://127.0.0.1:9/").await.unwrap();

    assert_eq!(report.saved_count(), 0);
    assert!(report.pages.len() <= 1);
    assert!(read_output(&dir).is_empty());
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let server = MockServer::start().await;
    mount_site(&server).await;
    let dir = TempDir::new().unwrap();
    let seed = format!("{}/", server.uri());

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    coordinator.run(&seed).await.unwrap();
    let first = read_output(&dir);

    coordinator.run(&seed).await.unwrap();
    let second = read_output(&dir);

    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
}

#[tokio::test]
async fn test_bounded_concurrency_keeps_worklist_order() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let links: String = (1..=6)
        .map(|i| format!(r#"<a href="/p{}">P{}</a>"#, i, i))
        .collect();
    mount_page(&server, "/", &links).await;
    for i in 1..=6u64 {
        // Earlier pages answer slower so completion order differs from worklist order
        Mock::given(method("GET"))
            .and(path(format!("/p{}", i)))
            .respond_with(
                html_response(&format!("<h1>Page {}</h1>", i))
                    .set_delay(Duration::from_millis(300 - i * 40)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let coordinator = Coordinator::new(create_test_config(&dir, 3)).unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    let paths: Vec<String> = report
        .pages
        .iter()
        .map(|p| p.address.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/", "/p1", "/p2", "/p3", "/p4", "/p5", "/p6"]);
    assert!(report.is_complete_success());

    let files = read_output(&dir);
    assert_eq!(files.len(), 7);
    assert!(files["_p4.md"].contains("# Page 4"));
    server.verify().await;
}

/// Converter that refuses pages containing a marker
struct PickyConverter;

impl MarkupConverter for PickyConverter {
    fn convert(&self, markup: &str) -> ConvertResult<String> {
        if markup.contains("REJECT") {
            return Err(ConvertError::Html(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "marker found",
            )));
        }
        HtmdConverter.convert(markup)
    }
}

#[tokio::test]
async fn test_conversion_failure_is_isolated() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_page(&server, "/", r#"<a href="/bad">Bad</a><a href="/good">Good</a>"#).await;
    mount_page(&server, "/bad", "<p>REJECT</p>").await;
    mount_page(&server, "/good", "<p>fine</p>").await;

    let coordinator = Coordinator::with_components(
        create_test_config(&dir, 2),
        Arc::new(PickyConverter),
        Arc::new(FsStore::new(dir.path())),
    )
    .unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    assert_eq!(report.saved_count(), 2);
    match &report.pages[1].outcome {
        PageOutcome::Failed { reason } => assert!(reason.contains("Conversion failed")),
        other => panic!("expected failure, got {:?}", other),
    }
    let files = read_output(&dir);
    assert!(files.contains_key("_good.md"));
    assert!(!files.contains_key("_bad.md"));
}

#[tokio::test]
async fn test_query_variants_share_one_file() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    mount_page(
        &server,
        "/",
        r#"<a href="/list?page=1">1</a><a href="/list?page=2">2</a>"#,
    )
    .await;
    for page in ["1", "2"] {
        Mock::given(method("GET"))
            .and(path("/list"))
            .and(query_param("page", page))
            .respond_with(html_response(&format!("<p>listing {}</p>", page)))
            .mount(&server)
            .await;
    }

    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();
    let report = coordinator.run(&server.uri()).await.unwrap();

    assert_eq!(report.pages.len(), 3);
    assert_eq!(report.saved_count(), 3);

    let files = read_output(&dir);
    assert_eq!(files.len(), 2);
    // Sequential processing: the later worklist entry wins
    assert!(files["_list.md"].contains("listing 2"));
}

#[tokio::test]
async fn test_missing_seed_aborts_before_io() {
    let dir = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&dir, 1)).unwrap();

    let err = coordinator.run("").await.unwrap_err();
    assert!(matches!(err, ScribeError::Usage(_)));
    assert!(!dir.path().join(FOLDER).exists());
}
