//! Library-agnostic DOM querying.
//!
//! The extractors only ever need CSS selection, element text and attribute
//! values, so that is all these traits expose.

use scraper::{ElementRef, Html, Selector};

/// A queryable element.
pub trait ElementView: Sized {
    /// All descendants matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self>;

    /// First descendant matching `selector`.
    fn select_one(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// Text content with every text node trimmed and empty nodes dropped,
    /// concatenated without a separator.
    fn stripped_text(&self) -> String;

    /// Value of attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// A parsed document that can be queried with CSS selectors.
pub trait DocumentView {
    /// Element handle borrowed from the document.
    type Element<'a>: ElementView
    where
        Self: 'a;

    /// All elements matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Vec<Self::Element<'_>>;

    /// First element matching `selector`.
    fn select_one(&self, selector: &str) -> Option<Self::Element<'_>> {
        self.select_all(selector).into_iter().next()
    }
}

/// `scraper`-backed document.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse markup as a full HTML document. Parsing never fails; broken
    /// markup is repaired the way a browser would.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl DocumentView for HtmlDocument {
    type Element<'a> = ElementRef<'a>;

    fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        compile(selector)
            .map(|sel| self.html.select(&sel).collect())
            .unwrap_or_default()
    }
}

impl<'a> ElementView for ElementRef<'a> {
    fn select_all(&self, selector: &str) -> Vec<ElementRef<'a>> {
        compile(selector)
            .map(|sel| self.select(&sel).collect())
            .unwrap_or_default()
    }

    fn stripped_text(&self) -> String {
        self.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }
}

/// An unparsable selector matches nothing.
fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(sel) => Some(sel),
        Err(e) => {
            tracing::warn!("Invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}
