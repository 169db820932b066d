use bizreg_browser::{BrowserActions, BrowserEngine};
use bizreg_core::BrowserConfig;

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_browser_engine_creation() {
    let engine = BrowserEngine::launch(&BrowserConfig::default()).await;
    assert!(engine.is_ok(), "Failed to create browser engine");
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_navigation_and_outer_html() {
    let engine = BrowserEngine::launch(&BrowserConfig::default()).await.unwrap();
    let session = engine.new_session().await.unwrap();

    session.navigate("https://example.com").await.unwrap();
    session.wait_for_selector("h1", 5_000).await.unwrap();

    let html = session.outer_html("h1").await.unwrap();
    assert!(html.starts_with("<h1"));

    session.close().await.unwrap();
    engine.close().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Chrome/Chromium installed
async fn test_wait_for_missing_selector_times_out() {
    let engine = BrowserEngine::launch(&BrowserConfig::default()).await.unwrap();
    let session = engine.new_session().await.unwrap();

    session.navigate("https://example.com").await.unwrap();
    assert!(session
        .wait_for_selector("#MainContent_txtEntityName", 500)
        .await
        .is_err());

    engine.close().await.unwrap();
}
