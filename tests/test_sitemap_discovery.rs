use seo_inspect::inspect;

const PAGE: &str = "<html><head><title>Example</title></head><body></body></html>";

async fn mock_page(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(PAGE)
        .create_async()
        .await
}

#[tokio::test]
async fn robots_sitemap_line_wins_and_skips_path_probing() {
    let mut server = mockito::Server::new_async().await;
    let _page = mock_page(&mut server).await;

    let robots_body = "User-agent: *\nDisallow: /admin/\nSitemap: https://example.com/map.xml\n";
    let _robots = server
        .mock("GET", "/robots.txt")
        .with_status(200)
        .with_body(robots_body)
        .create_async()
        .await;
    // Path probing must not happen when robots.txt announced a sitemap,
    // even though this location would answer 200.
    let sitemap = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body("<urlset/>")
        .expect(0)
        .create_async()
        .await;

    let record = inspect(&server.url()).await.unwrap();

    assert!(record.robots_txt_exists);
    assert_eq!(record.robots_txt_content.as_deref(), Some(robots_body));
    assert!(record.sitemap_exists);
    assert_eq!(record.sitemap_url.as_deref(), Some("https://example.com/map.xml"));
    sitemap.assert_async().await;
}

#[tokio::test]
async fn falls_back_to_sitemap_xml_when_robots_is_missing() {
    let mut server = mockito::Server::new_async().await;
    let _page = mock_page(&mut server).await;

    let _robots = server
        .mock("GET", "/robots.txt")
        .with_status(404)
        .create_async()
        .await;
    let _sitemap = server
        .mock("GET", "/sitemap.xml")
        .with_status(200)
        .with_body("<urlset/>")
        .create_async()
        .await;

    let record = inspect(&server.url()).await.unwrap();

    assert!(!record.robots_txt_exists);
    assert!(record.robots_txt_content.is_none());
    assert!(record.sitemap_exists);
    assert_eq!(
        record.sitemap_url,
        Some(format!("{}/sitemap.xml", server.url()))
    );
}

#[tokio::test]
async fn candidate_paths_are_tried_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _page = mock_page(&mut server).await;

    // robots.txt exists but has no Sitemap line, so probing continues
    let _robots = server
        .mock("GET", "/robots.txt")
        .with_status(200)
        .with_body("User-agent: *\nDisallow:\n")
        .create_async()
        .await;
    let first = server
        .mock("GET", "/sitemap.xml")
        .with_status(404)
        .create_async()
        .await;
    let _second = server
        .mock("GET", "/sitemap_index.xml")
        .with_status(200)
        .with_body("<sitemapindex/>")
        .create_async()
        .await;
    // Later candidates must not be reached after the first hit
    let fourth = server
        .mock("GET", "/sitemap/sitemap.xml")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let record = inspect(&server.url()).await.unwrap();

    assert!(record.robots_txt_exists);
    assert!(record.sitemap_exists);
    assert_eq!(
        record.sitemap_url,
        Some(format!("{}/sitemap_index.xml", server.url()))
    );
    first.assert_async().await;
    fourth.assert_async().await;
}

#[tokio::test]
async fn no_sitemap_anywhere_means_absent_and_false() {
    let mut server = mockito::Server::new_async().await;
    let _page = mock_page(&mut server).await;

    for path in [
        "/robots.txt",
        "/sitemap.xml",
        "/sitemap_index.xml",
        "/sitemap/",
        "/sitemap/sitemap.xml",
    ] {
        server
            .mock("GET", path)
            .with_status(404)
            .create_async()
            .await;
    }

    let record = inspect(&server.url()).await.unwrap();

    assert!(!record.robots_txt_exists);
    assert!(record.robots_txt_content.is_none());
    assert!(!record.sitemap_exists);
    assert!(record.sitemap_url.is_none());
    // Probe failures never fail the extraction; markup fields still land.
    assert_eq!(record.title.as_deref(), Some("Example"));
}

#[tokio::test]
async fn first_robots_sitemap_declaration_wins() {
    let mut server = mockito::Server::new_async().await;
    let _page = mock_page(&mut server).await;

    let _robots = server
        .mock("GET", "/robots.txt")
        .with_status(200)
        .with_body("Sitemap: https://example.com/first.xml\nSitemap: https://example.com/second.xml\n")
        .create_async()
        .await;

    let record = inspect(&server.url()).await.unwrap();

    assert_eq!(
        record.sitemap_url.as_deref(),
        Some("https://example.com/first.xml")
    );
}
