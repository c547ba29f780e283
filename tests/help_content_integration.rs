use bubblepop_help::application::HelpContentLoader;
use bubblepop_help::config::Config;
use bubblepop_help::domain::content::{ContentKey, HelpItem, LoadAttemptRecord};
use bubblepop_help::domain::errors::ContentError;
use bubblepop_help::domain::fallback::FallbackResolver;
use bubblepop_help::domain::search::SearchOptions;
use bubblepop_help::infrastructure::FileContentStore;
use bubblepop_help::infrastructure::i18n::all_categories;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn bundled_content_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("content/help")
}

fn bundled_loader() -> HelpContentLoader {
    let dir = bundled_content_dir();
    let config = Config::from_lookup(|key| {
        (key == "HELP_CONTENT_DIR").then(|| dir.display().to_string())
    })
    .expect("default config should load");
    HelpContentLoader::from_config(&config)
}

fn write_doc(root: &Path, language: &str, category: &str, raw: &str) {
    let dir = root.join(language);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{}.json", category)), raw).unwrap();
}

fn attempt_keys(attempts: &[LoadAttemptRecord]) -> Vec<ContentKey> {
    attempts.iter().map(|a| a.key()).collect()
}

#[tokio::test]
async fn test_unknown_language_served_by_fallback_scenario() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(
        dir.path(),
        "en",
        "bubbles",
        r#"{"title": "Bubbles", "topics": [{"id": "chain", "title": "Chain reactions"}]}"#,
    );

    let loader = HelpContentLoader::new(
        Arc::new(FileContentStore::new(dir.path())),
        FallbackResolver::new("en"),
        "en",
    );

    let fallback = loader.load_content("xx", "bubbles").await.unwrap();
    assert_eq!(
        attempt_keys(&loader.load_attempts().await),
        vec![ContentKey::new("xx", "bubbles"), ContentKey::new("en", "bubbles")]
    );

    let direct = loader.load_content("en", "bubbles").await.unwrap();
    assert_eq!(fallback, direct);
    assert_eq!(fallback.title.as_deref(), Some("Bubbles"));
}

#[tokio::test]
async fn test_malformed_document_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "en", "scoring", r#"{"title": "Scoring"}"#);
    write_doc(dir.path(), "ja", "scoring", r#"{"title": "スコア", "sections": 42}"#);

    let loader = HelpContentLoader::new(
        Arc::new(FileContentStore::new(dir.path())),
        FallbackResolver::new("en"),
        "ja",
    );

    let doc = loader.load_content("ja", "scoring").await.unwrap();
    assert_eq!(doc.title.as_deref(), Some("Scoring"));
    assert_eq!(loader.cache_size().await, 1);
}

#[tokio::test]
async fn test_exhausted_chain_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    let loader = HelpContentLoader::new(
        Arc::new(FileContentStore::new(dir.path())),
        FallbackResolver::new("en").with_chain("zh-CN", ["zh-TW"]),
        "en",
    );

    let err = loader.load_content("zh-CN", "bubbles").await.unwrap_err();
    assert!(matches!(
        err,
        ContentError::ContentNotFound { ref language, ref category }
            if language == "zh-CN" && category == "bubbles"
    ));
    assert_eq!(loader.load_attempts().await.len(), 3);
}

#[tokio::test]
async fn test_switch_language_forces_fresh_read() {
    let dir = tempfile::tempdir().unwrap();
    write_doc(dir.path(), "en", "controls", r#"{"title": "Controls"}"#);
    write_doc(dir.path(), "ja", "controls", r#"{"title": "操作方法"}"#);

    let loader = HelpContentLoader::new(
        Arc::new(FileContentStore::new(dir.path())),
        FallbackResolver::new("en"),
        "en",
    );
    loader.load_content("ja", "controls").await.unwrap();
    loader.load_content("en", "controls").await.unwrap();

    // Content updated on disk while cached
    write_doc(dir.path(), "ja", "controls", r#"{"title": "操作方法 v2"}"#);
    let stale = loader.load_content("ja", "controls").await.unwrap();
    assert_eq!(stale.title.as_deref(), Some("操作方法"));

    loader.switch_language("ja").await;
    assert_eq!(loader.cache_size().await, 1);

    let fresh = loader.load_content("ja", "controls").await.unwrap();
    assert_eq!(fresh.title.as_deref(), Some("操作方法 v2"));
    assert_eq!(loader.cache_size().await, 2);
}

#[tokio::test]
async fn test_bundled_content_resolves_regional_chain() {
    let loader = bundled_loader();

    let doc = loader.load_content("zh-CN", "bubbles").await.unwrap();
    assert_eq!(doc.language.as_deref(), Some("zh-TW"));

    let doc = loader.load_content("ko", "controls").await.unwrap();
    assert_eq!(doc.language.as_deref(), Some("ja"));

    loader.clear_load_attempts().await;
    let doc = loader.load_content("ko", "settings").await.unwrap();
    assert_eq!(doc.language.as_deref(), Some("en"));
    assert_eq!(
        attempt_keys(&loader.load_attempts().await),
        vec![
            ContentKey::new("ko", "settings"),
            ContentKey::new("ja", "settings"),
            ContentKey::new("en", "settings"),
        ]
    );

    let usage = loader.fallback_usage().await;
    assert_eq!(usage.get("ko"), Some(&2));
    assert_eq!(usage.get("zh-CN"), Some(&1));
}

#[tokio::test]
async fn test_bundled_content_item_lookup() {
    let loader = bundled_loader();

    let item = loader.load_item("zh-CN", "bubbles", "stone").await.unwrap();
    assert!(matches!(item, HelpItem::Section(ref s) if s.title == "石頭泡泡"));

    let item = loader
        .load_item("en", "troubleshooting", "faq-no-sound")
        .await
        .unwrap();
    assert!(matches!(item, HelpItem::Faq(_)));
}

#[tokio::test]
async fn test_bundled_content_coverage() {
    let loader = bundled_loader();
    let reports = loader.analyze_coverage(&all_categories()).await;
    assert_eq!(reports.len(), 5);

    let find = |lang: &str| reports.iter().find(|r| r.language == lang).unwrap();

    assert_eq!(find("en").available, 6);
    assert!(find("en").missing.is_empty());

    let ja = find("ja");
    assert_eq!(ja.available, 4);
    assert_eq!(ja.missing, vec!["settings", "troubleshooting"]);

    assert_eq!(find("zh-TW").available, 1);
    assert_eq!(find("ko").available, 0);
    assert_eq!(find("ko").coverage_pct, 0.0);
}

#[tokio::test]
async fn test_bundled_content_search() {
    let loader = bundled_loader();

    let results = loader
        .search("bubbles", "bonus", "ja", &SearchOptions::default())
        .await;

    // Japanese has no "bonus" text, so English results fill in
    assert!(!results.is_empty());
    assert_eq!(results[0].item_id, "rainbow");
    assert_eq!(results[0].source_language, "en");
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_loader_from_blocking_context() {
    let loader = bundled_loader();

    let doc = tokio_test::block_on(loader.load_content("en", "gameplay")).unwrap();
    assert_eq!(doc.tutorials.len(), 1);
    assert_eq!(doc.tutorials[0].steps[0].duration, Some(5000));

    tokio_test::block_on(loader.clear_cache());
    assert_eq!(tokio_test::block_on(loader.cache_size()), 0);
}
