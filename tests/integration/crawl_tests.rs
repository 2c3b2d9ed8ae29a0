//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use adk_docs_scraper::config::{Config, CrawlConfig, OutputConfig};
use adk_docs_scraper::crawler::{build_http_client, fetch_and_save, Coordinator, PageOutcome};
use adk_docs_scraper::output::{separator, OutputLayout};
use adk_docs_scraper::ScraperError;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling from `seed_url` into `output_dir`
fn create_test_config(seed_url: &str, output_dir: &TempDir) -> Config {
    Config {
        crawl: CrawlConfig {
            seed_url: seed_url.to_string(),
            output_dir: output_dir.path().to_string_lossy().into_owned(),
            delay_ms: 0,
        },
        output: OutputConfig::default(),
    }
}

fn html_page(title: &str, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<html><head><title>{}</title></head><body>{}</body></html>",
            title, body
        ))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Paths requested from the mock server, in arrival order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_seed_page_saved_and_only_prefix_links_followed() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    mount_page(
        &mock_server,
        "/docs/",
        html_page(
            "Intro",
            &format!(
                r#"<main>
                <p>Welcome to the docs</p>
                <script>console.log("tracking");</script>
                <a href="{}/docs/page2">Page 2</a>
                <a href="https://other.com/x">Elsewhere</a>
                </main>"#,
                mock_server.uri()
            ),
        ),
    )
    .await;

    let tmp = TempDir::new().unwrap();
    let layout = OutputLayout::new(tmp.path());
    layout.create().unwrap();
    let client = build_http_client().unwrap();
    let mut visited = HashSet::new();

    let outcome = fetch_and_save(&client, &seed, &layout, &mut visited, &seed).await;

    match outcome {
        PageOutcome::Saved { title, links, .. } => {
            assert_eq!(title, "Intro");
            assert_eq!(links, vec![format!("{}page2", seed)]);
        }
        other => panic!("expected saved page, got {:?}", other),
    }

    // `/docs/` flattens to `docs`
    let text = fs::read_to_string(layout.text_path("docs")).unwrap();
    assert!(text.starts_with(&format!("Title: Intro\nURL: {}\n\n", seed)));
    assert!(text.contains("Welcome to the docs"));
    assert!(!text.contains("tracking"));

    let html = fs::read_to_string(layout.html_path("docs")).unwrap();
    assert!(html.contains("<script>"));
}

#[tokio::test]
async fn test_not_found_writes_nothing_and_stays_unvisited() {
    let mock_server = MockServer::start().await;
    let base = format!("{}/docs/", mock_server.uri());

    mount_page(&mock_server, "/docs/missing", ResponseTemplate::new(404)).await;

    let tmp = TempDir::new().unwrap();
    let layout = OutputLayout::new(tmp.path());
    layout.create().unwrap();
    let client = build_http_client().unwrap();
    let mut visited = HashSet::new();

    let url = format!("{}missing", base);
    let outcome = fetch_and_save(&client, &url, &layout, &mut visited, &base).await;

    match &outcome {
        PageOutcome::Failed { status_code, .. } => assert_eq!(*status_code, Some(404)),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(outcome.links().is_empty());
    assert!(visited.is_empty());
    assert!(!layout.html_path("docs_missing").exists());
    assert!(!layout.text_path("docs_missing").exists());
}

#[tokio::test]
async fn test_full_crawl_breadth_first_order() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    mount_page(
        &mock_server,
        "/docs/",
        html_page(
            "Home",
            r#"<a href="a">A</a> <a href="b">B</a> <a href="c">C</a>"#,
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/a",
        html_page("A", r#"<a href="d">D</a> <a href="b">B again</a>"#),
    )
    .await;
    mount_page(&mock_server, "/docs/b", html_page("B", "leaf")).await;
    mount_page(&mock_server, "/docs/c", html_page("C", "leaf")).await;
    mount_page(&mock_server, "/docs/d", html_page("D", "leaf")).await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    let report = coordinator.run().await.expect("crawl should succeed");

    assert_eq!(
        requested_paths(&mock_server).await,
        vec!["/docs/", "/docs/a", "/docs/b", "/docs/c", "/docs/d"]
    );
    assert_eq!(report.pages_saved, 5);
    assert_eq!(report.pages_failed, 0);
    assert_eq!(coordinator.visited().len(), 5);
}

#[tokio::test]
async fn test_visited_page_not_refetched_through_anchors() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html_page(
            "Home",
            r##"<a href="page2">P2</a> <a href="page2#install">P2 install</a> <a href="#top">Top</a>"##,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/page2"))
        .respond_with(html_page(
            "Page 2",
            r##"<a href="/docs/#top">Home top</a> <a href="page2#usage">Usage</a> <a href="/docs/">Home</a>"##,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.pages_saved, 2);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_failed_url_is_retried_when_rediscovered() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    mount_page(
        &mock_server,
        "/docs/",
        html_page("Home", r#"<a href="broken">Broken</a> <a href="other">Other</a>"#),
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/other",
        html_page("Other", r#"<a href="broken">Broken again</a>"#),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/docs/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.pages_saved, 2);
    assert_eq!(report.pages_failed, 2);
    assert!(!coordinator
        .visited()
        .contains(&format!("{}broken", seed)));
    mock_server.verify().await;
}

#[tokio::test]
async fn test_filename_collision_overwrites() {
    let mock_server = MockServer::start().await;
    // No trailing slash, so `/docs/` is inside the prefix too
    let seed = format!("{}/docs", mock_server.uri());

    mount_page(
        &mock_server,
        "/docs",
        html_page("First", r#"<a href="/docs/">Slash</a>"#),
    )
    .await;
    mount_page(&mock_server, "/docs/", html_page("Second", "second body")).await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.pages_saved, 2);
    assert_eq!(report.pages_indexed, 1);

    let text = fs::read_to_string(tmp.path().join("text").join("docs.txt")).unwrap();
    assert!(text.starts_with(&format!("Title: Second\nURL: {}/\n\n", seed)));

    let text_files: Vec<_> = fs::read_dir(tmp.path().join("text")).unwrap().collect();
    assert_eq!(text_files.len(), 1);
}

#[tokio::test]
async fn test_uppercase_host_seed_follows_relative_links() {
    let mock_server = MockServer::start().await;
    let port = mock_server.address().port();
    let seed = format!("http://LOCALHOST:{}/docs/", port);

    mount_page(
        &mock_server,
        "/docs/",
        html_page("Intro", r#"<a href="page2">Next</a>"#),
    )
    .await;
    mount_page(&mock_server, "/docs/page2", html_page("Page 2", "second")).await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.pages_saved, 2);
    assert!(coordinator
        .visited()
        .contains(&format!("http://localhost:{}/docs/page2", port)));
    assert!(tmp.path().join("text").join("docs_page2.txt").is_file());
}

#[tokio::test]
async fn test_post_processing_artifacts() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    mount_page(
        &mock_server,
        "/docs/",
        html_page("Intro", r#"<a href="zebra">Z</a> <a href="alpha">A</a>"#),
    )
    .await;
    mount_page(&mock_server, "/docs/zebra", html_page("Zebra", "stripes")).await;
    mount_page(&mock_server, "/docs/alpha", html_page("Alpha", "first")).await;

    let tmp = TempDir::new().unwrap();
    let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
    coordinator.run().await.unwrap();

    let consolidated = fs::read_to_string(tmp.path().join("adk_docs_consolidated.txt")).unwrap();
    assert!(consolidated.starts_with(&format!(
        "# GOOGLE ADK DOCUMENTATION\n\nSource: {}\n\n",
        seed
    )));
    assert_eq!(consolidated.matches(&separator()).count(), 3);

    // Sorted by file name: docs.txt < docs_alpha.txt < docs_zebra.txt
    let intro = consolidated.find("Title: Intro").unwrap();
    let alpha = consolidated.find("Title: Alpha").unwrap();
    let zebra = consolidated.find("Title: Zebra").unwrap();
    assert!(intro < alpha && alpha < zebra);
    assert!(consolidated.contains(&format!("\n\n{}\n\nTitle: Alpha\n", separator())));

    let index = fs::read_to_string(tmp.path().join("index.md")).unwrap();
    assert_eq!(
        index,
        "# Google ADK Documentation Index\n\n\
         This index contains links to all scraped ADK documentation pages.\n\n\
         - [Intro](text/docs.txt)\n\
         - [Alpha](text/docs_alpha.txt)\n\
         - [Zebra](text/docs_zebra.txt)\n"
    );
}

#[tokio::test]
async fn test_rerun_starts_from_scratch() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .respond_with(html_page("Home", "only page"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let tmp = TempDir::new().unwrap();
    for _ in 0..2 {
        let mut coordinator = Coordinator::new(create_test_config(&seed, &tmp)).unwrap();
        let report = coordinator.run().await.unwrap();
        assert_eq!(report.pages_saved, 1);
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_unwritable_output_dir_aborts_run() {
    let mock_server = MockServer::start().await;
    let seed = format!("{}/docs/", mock_server.uri());

    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("out");
    fs::write(&blocker, "a file, not a directory").unwrap();

    let mut config = create_test_config(&seed, &tmp);
    config.crawl.output_dir = blocker.to_string_lossy().into_owned();

    let mut coordinator = Coordinator::new(config).unwrap();
    let result = coordinator.run().await;

    assert!(matches!(result, Err(ScraperError::Output(_))));
    assert!(requested_paths(&mock_server).await.is_empty());
}
