//! Integration tests for sitemap discovery
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! robots.txt → sitemap pipeline end-to-end.

use std::time::Duration;
use sumi_sitemap::config::Config;
use sumi_sitemap::crawler::format_user_agent;
use sumi_sitemap::{
    discover, DiscoveryError, FetchFailure, RobotsStatus, SiteSource, SitemapDiscovery,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given concurrency bound
fn create_test_config(max_concurrent_sitemaps: u32) -> Config {
    let mut config = Config::default();
    config.discovery.request_timeout_secs = 5;
    config.discovery.connect_timeout_secs = 2;
    config.discovery.max_concurrent_sitemaps = max_concurrent_sitemaps;
    config.user_agent.crawler_name = "TestBot".to_string();
    config.user_agent.crawler_version = "1.0.0".to_string();
    config
}

/// Builds a urlset body with the given locations
fn urlset(locations: &[String]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#,
    );
    for loc in locations {
        xml.push_str(&format!("<url><loc>{}</loc></url>", loc));
    }
    xml.push_str("</urlset>");
    xml
}

async fn mount_robots(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_xml(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/xml"),
        )
        .mount(server)
        .await;
}

fn source_for(server: &MockServer) -> SiteSource {
    SiteSource::parse(&server.uri()).expect("Failed to parse mock server origin")
}

#[tokio::test]
async fn test_two_sitemaps_in_declaration_order() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(
        &server,
        format!(
            "User-agent: *\nDisallow: /admin\nSitemap: {base}/pages.xml\nSitemap: {base}/empty.xml\n"
        ),
    )
    .await;

    let pages: Vec<String> = (1..=3).map(|i| format!("{base}/page{i}")).collect();
    mount_xml(&server, "/pages.xml", urlset(&pages)).await;
    mount_xml(&server, "/empty.xml", urlset(&[])).await;

    let report = discover(&create_test_config(4), &source_for(&server))
        .await
        .expect("Discovery failed");

    assert_eq!(report.robots, RobotsStatus::Declared(2));
    assert_eq!(report.records.len(), 2);
    assert_eq!(
        report.records[0].reference.as_str(),
        format!("{base}/pages.xml")
    );
    assert_eq!(report.records[0].urls, pages);
    assert_eq!(
        report.records[1].reference.as_str(),
        format!("{base}/empty.xml")
    );
    assert!(report.records[1].urls.is_empty());
    assert!(report.failures.is_empty());
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_server_error_skips_only_that_sitemap() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(
        &server,
        format!("Sitemap: {base}/a.xml\nSitemap: {base}/broken.xml\nSitemap: {base}/c.xml\n"),
    )
    .await;
    mount_xml(&server, "/a.xml", urlset(&[format!("{base}/a")])).await;
    Mock::given(method("GET"))
        .and(path("/broken.xml"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_xml(&server, "/c.xml", urlset(&[format!("{base}/c")])).await;

    let discovery = SitemapDiscovery::new(&create_test_config(1)).unwrap();

    let broken = discovery
        .parse_sitemap(&format!("{base}/broken.xml").as_str().into())
        .await;
    assert!(matches!(
        broken,
        Err(DiscoveryError::SitemapFetch {
            reason: FetchFailure::HttpStatus(500),
            ..
        })
    ));

    let report = discovery.discover_all(&source_for(&server)).await;

    let parsed: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.reference.as_str())
        .collect();
    assert_eq!(
        parsed,
        vec![format!("{base}/a.xml"), format!("{base}/c.xml")]
    );
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(
        report.failures[0].reference.as_str(),
        format!("{base}/broken.xml")
    );
}

#[tokio::test]
async fn test_malformed_sitemap_reported_as_parse_error() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(
        &server,
        format!("Sitemap: {base}/bad.xml\nSitemap: {base}/good.xml\n"),
    )
    .await;
    mount_xml(
        &server,
        "/bad.xml",
        "<urlset><url><loc>https://x/1</url></urlset>".to_string(),
    )
    .await;
    mount_xml(&server, "/good.xml", urlset(&[format!("{base}/ok")])).await;

    let report = discover(&create_test_config(2), &source_for(&server))
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].urls, vec![format!("{base}/ok")]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        DiscoveryError::SitemapParse { .. }
    ));
}

#[tokio::test]
async fn test_missing_robots_is_distinct_from_no_sitemaps() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let discovery = SitemapDiscovery::new(&create_test_config(4)).unwrap();
    let source = source_for(&server);

    let references = discovery.discover_sitemap_references(&source).await;
    assert_eq!(
        references,
        Err(DiscoveryError::RobotsFetch {
            url: source.robots_url(),
            reason: FetchFailure::HttpStatus(404),
        })
    );

    let report = discovery.discover_all(&source).await;
    assert!(matches!(report.robots, RobotsStatus::Unavailable(_)));
    assert!(report.records.is_empty());
    assert!(report.failures.is_empty());
    assert_eq!(report.errors().len(), 1);
}

#[tokio::test]
async fn test_robots_without_sitemaps_declares_none() {
    let server = MockServer::start().await;
    mount_robots(&server, "User-agent: *\nDisallow: /private\n".to_string()).await;

    let discovery = SitemapDiscovery::new(&create_test_config(4)).unwrap();
    let source = source_for(&server);

    assert_eq!(
        discovery.discover_sitemap_references(&source).await,
        Ok(vec![])
    );

    let report = discovery.discover_all(&source).await;
    assert_eq!(report.robots, RobotsStatus::Declared(0));
    assert!(report.records.is_empty());
    assert!(report.is_complete());
}

#[tokio::test]
async fn test_unreachable_robots_reported() {
    // Reserve a free port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let source = SiteSource::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    let report = discover(&create_test_config(1), &source).await.unwrap();

    match report.robots {
        RobotsStatus::Unavailable(DiscoveryError::RobotsFetch { url, .. }) => {
            assert_eq!(url, source.robots_url());
        }
        other => panic!("Expected unavailable robots.txt, got {:?}", other),
    }
}

#[tokio::test]
async fn test_order_kept_when_earlier_sitemaps_are_slower() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(
        &server,
        format!("Sitemap: {base}/slow.xml\nSitemap: {base}/medium.xml\nSitemap: {base}/fast.xml\n"),
    )
    .await;

    for (name, delay_ms) in [("slow", 400u64), ("medium", 200), ("fast", 0)] {
        Mock::given(method("GET"))
            .and(path(format!("/{name}.xml")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(urlset(&[format!("{base}/{name}")]))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(&server)
            .await;
    }

    let report = discover(&create_test_config(3), &source_for(&server))
        .await
        .unwrap();

    let urls: Vec<&str> = report
        .records
        .iter()
        .map(|r| r.urls[0].as_str())
        .collect();
    assert_eq!(
        urls,
        vec![
            format!("{base}/slow"),
            format!("{base}/medium"),
            format!("{base}/fast")
        ]
    );
}

#[tokio::test]
async fn test_nested_loc_elements_collected() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, format!("Sitemap: {base}/index.xml\n")).await;
    mount_xml(
        &server,
        "/index.xml",
        r#"<sitemapindex>
            <sitemap><loc>https://x/one.xml</loc></sitemap>
            <group><inner><loc>https://x/two.xml</loc></inner></group>
        </sitemapindex>"#
            .to_string(),
    )
    .await;

    let report = discover(&create_test_config(1), &source_for(&server))
        .await
        .unwrap();

    assert_eq!(
        report.records[0].urls,
        vec!["https://x/one.xml", "https://x/two.xml"]
    );
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(
        &server,
        format!("Sitemap: {base}/a.xml\nSitemap: {base}/missing.xml\n"),
    )
    .await;
    mount_xml(
        &server,
        "/a.xml",
        urlset(&[format!("{base}/1"), format!("{base}/2")]),
    )
    .await;

    let discovery = SitemapDiscovery::new(&create_test_config(2)).unwrap();
    let source = source_for(&server);

    let first = discovery.discover_all(&source).await;
    let second = discovery.discover_all(&source).await;

    assert_eq!(first, second);
    assert_eq!(first.records.len(), 1);
    assert_eq!(first.failures.len(), 1);

    let first_refs = discovery.discover_sitemap_references(&source).await.unwrap();
    let second_refs = discovery.discover_sitemap_references(&source).await.unwrap();
    assert_eq!(first_refs.len(), 2);
    assert_eq!(first_refs, second_refs);
}

#[tokio::test]
async fn test_user_agent_sent() {
    let server = MockServer::start().await;
    let config = create_test_config(1);

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .and(header(
            "user-agent",
            format_user_agent(&config.user_agent).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&server)
        .await;

    let report = discover(&config, &source_for(&server)).await.unwrap();
    assert_eq!(report.robots, RobotsStatus::Declared(0));
}

#[tokio::test]
async fn test_slow_robots_reported_as_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Sitemap: https://x/a.xml\n")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = create_test_config(1);
    config.discovery.request_timeout_secs = 1;

    let source = source_for(&server);
    let report = discover(&config, &source).await.unwrap();

    assert_eq!(
        report.robots,
        RobotsStatus::Unavailable(DiscoveryError::RobotsFetch {
            url: source.robots_url(),
            reason: FetchFailure::Timeout,
        })
    );
    assert!(report.records.is_empty());
}

#[tokio::test]
async fn test_redirected_sitemap_followed() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_robots(&server, format!("Sitemap: {base}/old.xml\n")).await;
    Mock::given(method("GET"))
        .and(path("/old.xml"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{base}/new.xml").as_str()),
        )
        .mount(&server)
        .await;
    mount_xml(&server, "/new.xml", urlset(&[format!("{base}/moved")])).await;

    let report = discover(&create_test_config(1), &source_for(&server))
        .await
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].reference.as_str(), format!("{base}/old.xml"));
    assert_eq!(report.records[0].urls, vec![format!("{base}/moved")]);
}
