//! Narrow capability interface over a rendered-DOM session.
//!
//! The pipeline needs exactly three things from a browser: navigate to a
//! URL, run a selector query, and read an element's text. Keeping that
//! surface behind a trait lets every stage run against an in-memory fake
//! in tests, with no rendering engine anywhere near the core logic.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("navigation failed: {0}")]
    Navigation(String),
    #[error("dom query failed: {0}")]
    Query(String),
}

#[async_trait]
pub trait DomSession {
    /// Opaque handle to a rendered element.
    type Node: Send + Sync;

    /// Navigate the session to `url` and wait for the page to render.
    async fn goto(&mut self, url: &str) -> Result<(), DomError>;

    /// All elements matching `selector`, searched under `scope` or across
    /// the whole page when `scope` is `None`. Zero matches is not an error;
    /// it means "absent".
    async fn query_all(
        &self,
        scope: Option<&Self::Node>,
        selector: &str,
    ) -> Result<Vec<Self::Node>, DomError>;

    /// Rendered text content of `node`.
    async fn text_content(&self, node: &Self::Node) -> Result<String, DomError>;
}
