use crate::error::{BrowserError, Result};

/// Browser actions for automation
#[async_trait::async_trait]
pub trait BrowserActions: Send + Sync {
    /// Navigate to a URL
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Type a value into a form field by selector
    async fn fill_field(&self, selector: &str, value: &str) -> Result<()>;

    /// Press Enter inside an element, submitting its form
    async fn press_enter(&self, selector: &str) -> Result<()>;

    /// Wait for a selector to appear
    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<()>;

    /// Outer HTML of an element
    async fn outer_html(&self, selector: &str) -> Result<String>;
}

/// Helper to extract domain from URL
pub fn extract_domain(url: &str) -> Result<String> {
    let url = url::Url::parse(url)
        .map_err(|e| BrowserError::NavigationError(format!("Invalid URL: {}", e)))?;

    url.host_str()
        .ok_or_else(|| BrowserError::NavigationError("No host in URL".to_string()))
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            extract_domain("https://business.sos.ri.gov/CorpWeb/CorpSearch/CorpSearch.aspx")
                .unwrap(),
            "business.sos.ri.gov"
        );
        assert_eq!(
            extract_domain("http://localhost:9222/json/version").unwrap(),
            "localhost"
        );
    }

    #[test]
    fn test_extract_domain_invalid() {
        assert!(extract_domain("CorpSearch.aspx").is_err());
    }
}
