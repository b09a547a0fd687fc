//! Listing flow: next-link traversal producing summary rows

use crate::support::{book_slug, create_test_config, listing_page, mount_catalog, BOOKS_PER_PAGE};
use folio_crawl::crawler::{scrape_listing, Coordinator};
use folio_crawl::FolioError;
use std::time::{Duration, Instant};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_follows_next_links_to_last_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_catalog(&mock_server, 3).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let rows = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), None)
        .await
        .expect("Listing crawl failed");

    assert_eq!(rows.len(), 3 * BOOKS_PER_PAGE);

    let first = &rows[0];
    assert_eq!(first.title, format!("Title of {}", book_slug(1, 1)));
    assert_eq!(first.price, "12.50");
    assert_eq!(first.rating, "Two");
    assert_eq!(first.availability, "In stock");
    assert_eq!(
        first.url,
        format!("{}/catalogue/{}/index.html", base_url, book_slug(1, 1))
    );

    let last = rows.last().unwrap();
    assert_eq!(
        last.url,
        format!(
            "{}/catalogue/{}/index.html",
            base_url,
            book_slug(3, BOOKS_PER_PAGE)
        )
    );
}

#[tokio::test]
async fn test_max_pages_limits_traversal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_catalog(&mock_server, 3).await;

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let rows = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), Some(2))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2 * BOOKS_PER_PAGE);
}

#[tokio::test]
async fn test_self_referential_next_link_stops() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(&[book_slug(1, 1)], Some("page-1.html")))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let rows = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), None)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_cycle_between_pages_stops() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for (page, next) in [(1, "page-2.html"), (2, "page-1.html")] {
        Mock::given(method("GET"))
            .and(path(format!("/catalogue/page-{}.html", page)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(listing_page(&[book_slug(page, 1)], Some(next)))
                    .insert_header("content-type", "text/html"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let rows = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), None)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_redirect_to_visited_page_stops() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let first_page = format!("{}/catalogue/page-1.html", base_url);

    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(&[book_slug(1, 1)], Some("page-2.html")))
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/catalogue/page-2.html"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", first_page.as_str()))
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let rows = coordinator.scrape_listing(&first_page, None).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].url,
        format!("{}/catalogue/{}/index.html", base_url, book_slug(1, 1))
    );
}

#[tokio::test]
async fn test_page_delay_between_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_catalog(&mock_server, 3).await;

    let mut config = create_test_config(&base_url, "artifacts");
    config.catalog.page_delay_ms = 150;
    let coordinator = Coordinator::new(config).unwrap();

    let started = Instant::now();
    let rows = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), None)
        .await
        .unwrap();

    assert_eq!(rows.len(), 3 * BOOKS_PER_PAGE);
    // Two waits: before page 2 and before page 3
    assert!(
        started.elapsed() >= Duration::from_millis(300),
        "elapsed {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn test_missing_next_page_aborts_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/catalogue/page-1.html"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(&[book_slug(1, 1)], Some("page-2.html")))
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let coordinator = Coordinator::new(create_test_config(&base_url, "artifacts")).unwrap();
    let result = coordinator
        .scrape_listing(&format!("{}/catalogue/page-1.html", base_url), None)
        .await;

    assert!(matches!(result, Err(FolioError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_scrape_listing_writes_tsv() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    mount_catalog(&mock_server, 2).await;

    let dir = tempdir().unwrap();
    let out_file = dir.path().join("artifacts").join("books.tsv");
    let config = create_test_config(&base_url, "unused");

    let rows = scrape_listing(
        config,
        &format!("{}/catalogue/page-1.html", base_url),
        None,
        &out_file,
    )
    .await
    .expect("Listing crawl failed");
    assert_eq!(rows.len(), 40);

    let content = std::fs::read_to_string(&out_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 41);
    assert_eq!(lines[0], "title\tprice\trating\tavailability\turl");
    assert!(lines[1..].iter().all(|line| line.split('\t').count() == 5));
}
