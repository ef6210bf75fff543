//! Pipeline tests over an in-memory fetcher.

use super::*;
use crate::fetch::FetchError;
use crate::placeholder::PLACEHOLDER_PNG;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;

const LOOKUP: &str = "http://lookup.test/results.php?freetext={query}";
const IMAGES: &str = "http://lookup.test/xfinger/";

fn lookup(encoded: &str) -> String {
    format!("http://lookup.test/results.php?freetext={}", encoded)
}

fn image(path: &str) -> String {
    format!("http://lookup.test/xfinger/{}", path)
}

/// URL → canned response, with optional per-URL delay and a request log.
#[derive(Default)]
struct FakeFetcher {
    routes: HashMap<String, Result<Vec<u8>, FetchError>>,
    delays: HashMap<String, Duration>,
    panics: HashSet<String>,
    log: Mutex<Vec<String>>,
}

impl FakeFetcher {
    fn page(mut self, name: &str, html: &str) -> Self {
        self.routes.insert(lookup(name), Ok(html.as_bytes().to_vec()));
        self
    }

    fn bytes(mut self, url: String, body: &[u8]) -> Self {
        self.routes.insert(url, Ok(body.to_vec()));
        self
    }

    fn fail(mut self, url: String, err: FetchError) -> Self {
        self.routes.insert(url, Err(err));
        self
    }

    fn delay(mut self, url: String, d: Duration) -> Self {
        self.delays.insert(url, d);
        self
    }

    fn panic_on(mut self, url: String) -> Self {
        self.panics.insert(url);
        self
    }

    fn requested(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl Fetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if let Some(d) = self.delays.get(url) {
            std::thread::sleep(*d);
        }
        self.log.lock().unwrap().push(url.to_string());
        if self.panics.contains(url) {
            panic!("fetcher blew up on {url}");
        }
        self.routes.get(url).cloned().unwrap_or(Err(FetchError::Remote {
            url: url.to_string(),
            status: 404,
        }))
    }
}

fn transport(url: &str) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        reason: "Couldn't connect to server".to_string(),
    }
}

fn pipeline(fetcher: Arc<FakeFetcher>, dir: &Path, max_in_flight: Option<usize>) -> Pipeline {
    let resolver = ImageResolver::new(fetcher, LOOKUP, IMAGES).unwrap();
    Pipeline::new(
        resolver,
        PipelineSettings {
            output_dir: dir.to_path_buf(),
            extension: "png".to_string(),
            max_in_flight,
        },
    )
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn standard_fetcher() -> FakeFetcher {
    FakeFetcher::default()
        .page("ada", r#"<table><tr><td><img src="pics/ada.png"></td></tr></table>"#)
        .page("bob", r#"<img src="pics/bob.png">"#)
        .bytes(image("pics/ada.png"), b"\x89PNG real ada")
        .bytes(image("pics/bob.png"), PLACEHOLDER_PNG)
        .fail(lookup("carol"), transport(&lookup("carol")))
}

#[tokio::test]
async fn saved_and_placeholder_scenario() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher());
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["ada", "bob"]))
        .await;

    assert_eq!(out.len(), 2);
    match &out["ada"] {
        Outcome::Saved(path) => {
            assert_eq!(path, &dir.path().join("ada.png"));
            assert_eq!(std::fs::read(path).unwrap(), b"\x89PNG real ada");
        }
        other => panic!("expected Saved, got {other:?}"),
    }
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
    assert!(!dir.path().join("bob.png").exists());
}

#[tokio::test]
async fn lookup_transport_error_is_isolated() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher());
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["carol", "ada", "bob"]))
        .await;

    assert_eq!(out.len(), 3);
    assert!(matches!(
        &out["carol"],
        Outcome::ResolveFailed(ResolveError::Fetch(FetchError::Transport { .. }))
    ));
    assert!(out["ada"].is_saved());
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
}

#[tokio::test]
async fn slow_lookup_does_not_change_outcomes() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(
        standard_fetcher().delay(lookup("ada"), Duration::from_millis(150)),
    );
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["ada", "bob"]))
        .await;
    assert!(out["ada"].is_saved());
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
}

#[tokio::test]
async fn downloads_start_only_after_all_lookups() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(
        standard_fetcher().delay(lookup("carol"), Duration::from_millis(150)),
    );
    let out = pipeline(Arc::clone(&fetcher), dir.path(), None)
        .run(&names(&["ada", "bob", "carol"]))
        .await;
    assert_eq!(out.len(), 3);

    let log = fetcher.requested();
    let last_lookup = log
        .iter()
        .rposition(|u| u.contains("results.php"))
        .unwrap();
    let first_image = log.iter().position(|u| u.contains("/pics/")).unwrap();
    assert!(last_lookup < first_image, "request order: {log:?}");
}

#[tokio::test]
async fn no_image_on_page_is_no_match() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher().page("zed", "<p>Inga träffar</p>"));
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["zed"]))
        .await;
    assert!(matches!(out["zed"], Outcome::NoMatch));
}

#[tokio::test]
async fn unencodable_name_fails_without_request() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher());
    let out = pipeline(Arc::clone(&fetcher), dir.path(), None)
        .run(&names(&["Łukasz", "ada"]))
        .await;
    assert!(matches!(
        &out["Łukasz"],
        Outcome::ResolveFailed(ResolveError::Encoding(e)) if e.ch == 'Ł'
    ));
    assert!(out["ada"].is_saved());
    assert!(fetcher.requested().iter().all(|u| !u.contains("ukasz")));
}

#[tokio::test]
async fn image_fetch_failure_is_download_failed() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(
        FakeFetcher::default()
            .page("dan", r#"<img src="pics/dan.png">"#)
            .fail(image("pics/dan.png"), transport(&image("pics/dan.png"))),
    );
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["dan"]))
        .await;
    assert!(matches!(
        &out["dan"],
        Outcome::DownloadFailed(DownloadError::Fetch(FetchError::Transport { .. }))
    ));
}

#[tokio::test]
async fn write_failure_is_download_failed() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let fetcher = Arc::new(standard_fetcher());
    let out = pipeline(fetcher, &missing, None)
        .run(&names(&["ada", "bob"]))
        .await;
    match &out["ada"] {
        Outcome::DownloadFailed(DownloadError::Filesystem { path, .. }) => {
            assert_eq!(path, &missing.join("ada.png"));
        }
        other => panic!("expected Filesystem failure, got {other:?}"),
    }
    // Placeholder check happens before any write.
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
}

#[tokio::test]
async fn first_image_in_document_order_is_downloaded() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(
        FakeFetcher::default()
            .page(
                "eve",
                r#"<img src="pics/%zz.png"><div><img src="pics/first.png"></div><img src="pics/second.png">"#,
            )
            .bytes(image("pics/first.png"), b"first")
            .bytes(image("pics/second.png"), b"second"),
    );
    let out = pipeline(Arc::clone(&fetcher), dir.path(), None)
        .run(&names(&["eve"]))
        .await;
    assert!(out["eve"].is_saved());
    assert_eq!(std::fs::read(dir.path().join("eve.png")).unwrap(), b"first");
    assert!(!fetcher.requested().contains(&image("pics/second.png")));
}

#[tokio::test]
async fn exactly_one_outcome_per_distinct_name() {
    let dir = tempdir().unwrap();
    let mut fetcher = standard_fetcher();
    let mut input = Vec::new();
    for i in 0..30 {
        let name = format!("p{}", i);
        match i % 5 {
            0 => {
                fetcher = fetcher
                    .page(&name, &format!(r#"<img src="pics/{name}.png">"#))
                    .bytes(image(&format!("pics/{name}.png")), name.as_bytes());
            }
            1 => {
                fetcher = fetcher
                    .page(&name, &format!(r#"<img src="pics/{name}.png">"#))
                    .bytes(image(&format!("pics/{name}.png")), PLACEHOLDER_PNG);
            }
            2 => fetcher = fetcher.page(&name, "<p>none</p>"),
            3 => fetcher = fetcher.fail(lookup(&name), transport(&lookup(&name))),
            _ => {} // unknown route: HTTP 404 on lookup
        }
        input.push(name);
    }
    // Repeats collapse into the same entry.
    input.push("p0".to_string());
    input.push("p3".to_string());

    let out = pipeline(Arc::new(fetcher), dir.path(), Some(4)).run(&input).await;

    assert_eq!(out.len(), 30);
    for i in 0..30 {
        let name = format!("p{}", i);
        let outcome = out.get(&name).unwrap_or_else(|| panic!("{name} missing"));
        let expected = match i % 5 {
            0 => "saved",
            1 => "placeholder",
            2 => "no_match",
            _ => "resolve_failed",
        };
        assert_eq!(outcome.status(), expected, "{name}");
    }
}

#[tokio::test]
async fn panic_during_lookup_is_resolve_failed_for_that_name() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher().panic_on(lookup("ada")));
    let out = pipeline(fetcher, dir.path(), Some(1))
        .run(&names(&["ada", "bob"]))
        .await;
    assert_eq!(out.len(), 2);
    assert!(matches!(
        &out["ada"],
        Outcome::ResolveFailed(ResolveError::Task { name, .. }) if name == "ada"
    ));
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
}

#[tokio::test]
async fn panic_during_download_is_download_failed_for_that_name() {
    let dir = tempdir().unwrap();
    let fetcher = Arc::new(standard_fetcher().panic_on(image("pics/ada.png")));
    let out = pipeline(fetcher, dir.path(), None)
        .run(&names(&["ada", "bob", "carol"]))
        .await;
    assert_eq!(out.len(), 3);
    assert!(matches!(
        &out["ada"],
        Outcome::DownloadFailed(DownloadError::Task { name, .. }) if name == "ada"
    ));
    assert!(!dir.path().join("ada.png").exists());
    assert!(matches!(out["bob"], Outcome::PlaceholderSkipped));
    assert!(out["carol"].is_failure());
}

#[tokio::test]
async fn empty_batch_returns_empty_map() {
    let dir = tempdir().unwrap();
    let out = pipeline(Arc::new(FakeFetcher::default()), dir.path(), None)
        .run(&[])
        .await;
    assert!(out.is_empty());
}

#[test]
fn distinct_keeps_first_occurrence_order() {
    assert_eq!(
        distinct(&names(&["b", "a", "b", "c", "a"])),
        names(&["b", "a", "c"])
    );
}

#[test]
fn settings_from_config() {
    let mut cfg = MugConfig::default();
    cfg.extension = "jpg".to_string();
    cfg.max_in_flight = Some(2);
    let s = PipelineSettings::from_config(&cfg, PathBuf::from("/tmp/out"));
    assert_eq!(s.extension, "jpg");
    assert_eq!(s.max_in_flight, Some(2));
    assert_eq!(s.output_dir, PathBuf::from("/tmp/out"));
}
