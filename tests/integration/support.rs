//! Fake catalog served from a wiremock server

use folio_crawl::config::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const BOOKS_PER_PAGE: usize = 20;

/// Creates a test configuration pointing at the mock server
pub fn create_test_config(base_url: &str, output_dir: &str) -> Config {
    let mut config = Config::default();
    config.http.user_agent = "FolioTest/1.0".to_string();
    config.http.timeout_secs = 5;
    config.catalog.base_url = format!("{}/", base_url);
    config.catalog.first_page = format!("{}/catalogue/page-1.html", base_url);
    config.catalog.safety_cap = 50;
    config.catalog.page_delay_ms = 0;
    config.output.directory = output_dir.to_string();
    config
}

pub fn book_slug(page: usize, index: usize) -> String {
    format!("book-{}-{}_{}", page, index, page * 100 + index)
}

fn card(slug: &str, title: &str) -> String {
    format!(
        r#"<li class="col-xs-6 col-sm-4 col-md-3 col-lg-3"><article class="product_pod">
            <div class="image_container"><a href="{slug}/index.html"><img src="../media/{slug}.jpg" alt="{title}" class="thumbnail"></a></div>
            <p class="star-rating Two"><i class="icon-star"></i></p>
            <h3><a href="{slug}/index.html" title="{title}">{title}</a></h3>
            <div class="product_price">
                <p class="price_color">£12.50</p>
                <p class="instock availability"><i class="icon-ok"></i> In stock </p>
            </div>
        </article></li>"#,
        slug = slug,
        title = title
    )
}

/// Renders a listing page with the given book slugs and optional next link
pub fn listing_page(slugs: &[String], next: Option<&str>) -> String {
    let cards: Vec<String> = slugs
        .iter()
        .map(|slug| card(slug, &format!("Title of {}", slug)))
        .collect();

    let pager = match next {
        Some(href) => format!(
            r#"<ul class="pager"><li class="current">Page</li><li class="next"><a href="{}">next</a></li></ul>"#,
            href
        ),
        None => r#"<ul class="pager"><li class="current">Page</li></ul>"#.to_string(),
    };

    format!(
        r#"<!DOCTYPE html><html><head><title>All products</title></head><body>
        <section><ol class="row">{}</ol><div>{}</div></section>
        </body></html>"#,
        cards.join("\n"),
        pager
    )
}

/// Renders a book detail page
pub fn detail_page(title: &str, rating: &str, price: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><body>
        <article class="product_page">
          <div class="row"><div class="col-sm-6 product_main">
            <h1>{title}</h1>
            <p class="price_color">{price}</p>
            <p class="star-rating {rating}"><i class="icon-star"></i></p>
          </div></div>
          <div id="product_description" class="sub-header"><h2>Product Description</h2></div>
          <p>Description of {title}.</p>
          <table class="table table-striped">
            <tr><th>UPC</th><td>upc-{rating}</td></tr>
            <tr><th>Price (excl. tax)</th><td>{price}</td></tr>
            <tr><th>Price (incl. tax)</th><td>{price}</td></tr>
            <tr><th>Availability</th><td>In stock (3 available)</td></tr>
          </table>
        </article>
        </body></html>"#,
        title = title,
        rating = rating,
        price = price
    )
}

pub async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mounts a catalog of `pages` listing pages with 20 books each
///
/// Listing pages link to each other with "next" links; every book has a
/// detail page. Any other path answers 404.
pub async fn mount_catalog(server: &MockServer, pages: usize) {
    for page in 1..=pages {
        let slugs: Vec<String> = (1..=BOOKS_PER_PAGE)
            .map(|index| book_slug(page, index))
            .collect();

        let next = format!("page-{}.html", page + 1);
        let next = (page < pages).then_some(next.as_str());

        mount_html(
            server,
            &format!("/catalogue/page-{}.html", page),
            listing_page(&slugs, next),
        )
        .await;

        for slug in &slugs {
            mount_html(
                server,
                &format!("/catalogue/{}/index.html", slug),
                detail_page(&format!("Title of {}", slug), "Four", "£12.50"),
            )
            .await;
        }
    }
}
