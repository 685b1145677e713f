use mirage_core::{FeedConfig, OrderToken, Page};
use mirage_error::{MirageResult, StorageError, StorageErrorKind};
use mirage_server::{AppState, IMAGE_CACHE_CONTROL, MEDIA_CACHE_CONTROL, create_router};
use mirage_storage::{FetchedObject, KeyLister, ObjectFetcher};
use std::collections::HashSet;
use std::sync::Arc;

struct StaticKeys(Arc<Vec<String>>);

#[async_trait::async_trait]
impl KeyLister for StaticKeys {
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>> {
        Ok(Arc::clone(&self.0))
    }
}

struct BrokenKeys;

#[async_trait::async_trait]
impl KeyLister for BrokenKeys {
    async fn list_keys(&self) -> MirageResult<Arc<Vec<String>>> {
        Err(StorageError::new(StorageErrorKind::ListFailed("bucket offline".into())).into())
    }
}

/// Fake bucket: `missing*` keys 404, `private*` keys 403, `broken*` keys fail outright.
struct FakeObjects;

#[async_trait::async_trait]
impl ObjectFetcher for FakeObjects {
    async fn fetch(&self, key: &str) -> MirageResult<FetchedObject> {
        if key.starts_with("broken") {
            return Err(StorageError::new(StorageErrorKind::FetchFailed("reset".into())).into());
        }
        if key.starts_with("missing") {
            return Ok(FetchedObject::from_bytes(404, ""));
        }
        if key.starts_with("private") {
            return Ok(FetchedObject::from_bytes(403, ""));
        }
        let mut object = FetchedObject::from_bytes(200, format!("bytes of {key}"));
        object.etag = Some("\"v1\"".to_string());
        object.last_modified = Some("Tue, 01 Oct 2024 10:00:00 GMT".to_string());
        Ok(object)
    }
}

fn gallery_keys(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 5 == 0 {
                format!("clips/{i:03}.mp4")
            } else {
                format!("photos/{i:03}.jpg")
            }
        })
        .collect()
}

async fn spawn(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state))
            .await
            .expect("serve gallery");
    });
    format!("http://{addr}")
}

async fn spawn_with_keys(n: usize) -> String {
    let state = AppState::new(
        Arc::new(StaticKeys(Arc::new(gallery_keys(n)))),
        Arc::new(FakeObjects),
        FeedConfig::default(),
    );
    spawn(state).await
}

#[tokio::test]
async fn first_page_mints_order_and_sets_cache_headers() {
    let base = spawn_with_keys(50).await;
    let response = reqwest::get(format!("{base}/api/media"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["cache-control"].to_str().expect("header"),
        MEDIA_CACHE_CONTROL
    );
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(json["items"].as_array().expect("items").len(), 24);
    assert_eq!(json["nextOffset"], 24);
    let order = json["order"].as_str().expect("order string");
    assert!(order.parse::<u32>().is_ok());
}

#[tokio::test]
async fn pages_of_one_order_cover_all_keys() {
    let base = spawn_with_keys(50).await;
    let client = reqwest::Client::new();

    let mut seen = Vec::new();
    let mut order: Option<String> = None;
    let mut offset = 0usize;
    loop {
        let mut request = client.get(format!("{base}/api/media"));
        if let Some(order) = &order {
            request = request.query(&[("order", order.clone()), ("offset", offset.to_string())]);
        }
        let page: Page = request
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("page");
        order = Some(page.order().to_string());
        seen.extend(page.items().iter().map(|item| item.key().clone()));
        match page.next_offset() {
            Some(next) => offset = *next,
            None => break,
        }
    }

    assert_eq!(seen.len(), 50);
    let unique: HashSet<_> = seen.into_iter().collect();
    assert_eq!(unique, gallery_keys(50).into_iter().collect::<HashSet<_>>());
}

#[tokio::test]
async fn same_order_and_offset_repeat_exactly() {
    let base = spawn_with_keys(30).await;
    let url = format!("{base}/api/media?order=42&offset=24");
    let a: serde_json::Value = reqwest::get(&url).await.expect("a").json().await.expect("a json");
    let b: serde_json::Value = reqwest::get(&url).await.expect("b").json().await.expect("b json");

    assert_eq!(a, b);
    assert_eq!(a["order"], "42");
    assert_eq!(a["items"].as_array().expect("items").len(), 6);
    assert!(a.get("nextOffset").is_none());
}

#[tokio::test]
async fn offset_beyond_end_is_empty() {
    let base = spawn_with_keys(10).await;
    let json: serde_json::Value = reqwest::get(format!("{base}/api/media?order=7&offset=500"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");

    assert_eq!(json["items"].as_array().expect("items").len(), 0);
    assert!(json.get("nextOffset").is_none());
    assert_eq!(json["order"], "7");
}

#[tokio::test]
async fn bad_offset_and_order_are_tolerated() {
    let base = spawn_with_keys(10).await;
    let json: serde_json::Value =
        reqwest::get(format!("{base}/api/media?order=banana&offset=-3&nonce=17"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json");

    assert_eq!(json["items"].as_array().expect("items").len(), 10);
    let raw = json["order"].as_str().expect("order");
    let order: OrderToken = raw.parse().expect("minted token");
    assert_eq!(order.to_string(), raw);
}

#[tokio::test]
async fn order_is_echoed_exactly_or_replaced() {
    let base = spawn_with_keys(10).await;
    let order_for = |query: &'static str| {
        let url = format!("{base}/api/media?order={query}");
        async move {
            let json: serde_json::Value = reqwest::get(url)
                .await
                .expect("request")
                .json()
                .await
                .expect("json");
            json["order"].as_str().expect("order").to_string()
        }
    };

    assert_eq!(order_for("42").await, "42");
    assert_eq!(order_for("0").await, "0");

    for padded in ["042", "%2B42", "%207"] {
        let echoed = order_for(padded).await;
        assert_ne!(echoed, "42");
        assert_ne!(echoed, "7");
        let token: OrderToken = echoed.parse().expect("fresh canonical token");
        assert_eq!(token.to_string(), echoed);
    }
}

#[tokio::test]
async fn items_carry_types() {
    let base = spawn_with_keys(10).await;
    let page: Page = reqwest::get(format!("{base}/api/media?order=1"))
        .await
        .expect("request")
        .json()
        .await
        .expect("page");

    for item in page.items() {
        assert_eq!(item.is_video(), item.key().ends_with(".mp4"));
    }
}

#[tokio::test]
async fn listing_failure_is_a_500() {
    let state = AppState::new(
        Arc::new(BrokenKeys),
        Arc::new(FakeObjects),
        FeedConfig::default(),
    );
    let base = spawn(state).await;
    let response = reqwest::get(format!("{base}/api/media"))
        .await
        .expect("request");

    assert_eq!(response.status(), 500);
    let json: serde_json::Value = response.json().await.expect("json");
    assert_eq!(json["error"], "Failed to fetch media");
}

#[tokio::test]
async fn configured_page_size_is_used() {
    let state = AppState::new(
        Arc::new(StaticKeys(Arc::new(gallery_keys(5)))),
        Arc::new(FakeObjects),
        FeedConfig::default().with_page_size(2),
    );
    let base = spawn(state).await;
    let page: Page = reqwest::get(format!("{base}/api/media?order=42"))
        .await
        .expect("request")
        .json()
        .await
        .expect("page");

    assert_eq!(page.items().len(), 2);
    assert_eq!(*page.next_offset(), Some(2));
}

#[tokio::test]
async fn image_requires_key() {
    let base = spawn_with_keys(1).await;
    for url in [format!("{base}/api/image"), format!("{base}/api/image?key=")] {
        let response = reqwest::get(url).await.expect("request");
        assert_eq!(response.status(), 400);
        assert_eq!(response.text().await.expect("body"), "Missing key");
    }
}

#[tokio::test]
async fn image_is_proxied_with_inferred_type() {
    let base = spawn_with_keys(1).await;
    let response = reqwest::get(format!("{base}/api/image?key=photos%2Fcat.JPG"))
        .await
        .expect("request");

    assert_eq!(response.status(), 200);
    let headers = response.headers().clone();
    assert_eq!(headers["content-type"], "image/jpeg");
    assert_eq!(headers["cache-control"], IMAGE_CACHE_CONTROL);
    assert_eq!(headers["etag"], "\"v1\"");
    assert_eq!(headers["last-modified"], "Tue, 01 Oct 2024 10:00:00 GMT");
    assert_eq!(headers["content-length"], "23");
    assert_eq!(
        response.text().await.expect("body"),
        "bytes of photos/cat.JPG"
    );
}

#[tokio::test]
async fn unknown_extension_is_octet_stream() {
    let base = spawn_with_keys(1).await;
    let response = reqwest::get(format!("{base}/api/image?key=notes.bin"))
        .await
        .expect("request");
    assert_eq!(response.headers()["content-type"], "application/octet-stream");
}

#[tokio::test]
async fn upstream_status_is_forwarded() {
    let base = spawn_with_keys(1).await;

    let missing = reqwest::get(format!("{base}/api/image?key=missing.png"))
        .await
        .expect("request");
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.text().await.expect("body"), "Not found");

    let private = reqwest::get(format!("{base}/api/image?key=private.png"))
        .await
        .expect("request");
    assert_eq!(private.status(), 403);
}

#[tokio::test]
async fn fetch_failure_is_a_500() {
    let base = spawn_with_keys(1).await;
    let response = reqwest::get(format!("{base}/api/image?key=broken.png"))
        .await
        .expect("request");
    assert_eq!(response.status(), 500);
    assert_eq!(response.text().await.expect("body"), "Internal error");
}

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_with_keys(0).await;
    let json: serde_json::Value = reqwest::get(format!("{base}/health"))
        .await
        .expect("request")
        .json()
        .await
        .expect("json");
    assert_eq!(json["status"], "ok");
}
