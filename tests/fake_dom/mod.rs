//! In-memory DOM session used to drive the scrape pipeline in tests.
//!
//! Nodes declare the selectors they answer to, and a query returns every
//! descendant tagged with the selector. Pages are registered per URL.

use std::collections::HashMap;

use async_trait::async_trait;
use bikedex::dom::{DomError, DomSession};

pub const COUNT_SELECTOR: &str = "#stolenness_tab_proximity .count";
pub const BIKE_BOX_SELECTOR: &str = ".bike-box-item";
pub const TITLE_SELECTOR: &str = ".title-link";
pub const ATTR_LIST_SELECTOR: &str = "ul.attr-list";
pub const ATTR_ITEM_SELECTOR: &str = "li";

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    pub selectors: Vec<&'static str>,
    pub text: String,
    pub children: Vec<FakeNode>,
}

impl FakeNode {
    pub fn leaf(selector: &'static str, text: &str) -> Self {
        Self {
            selectors: vec![selector],
            text: text.to_owned(),
            children: Vec::new(),
        }
    }

    pub fn parent(selector: &'static str, children: Vec<FakeNode>) -> Self {
        Self {
            selectors: vec![selector],
            text: String::new(),
            children,
        }
    }

    fn collect_matches(&self, selector: &str, out: &mut Vec<FakeNode>) {
        for child in &self.children {
            if child.selectors.contains(&selector) {
                out.push(child.clone());
            }
            child.collect_matches(selector, out);
        }
    }
}

/// The landing-page result counter, e.g. `counter("(23)")`.
pub fn counter(text: &str) -> FakeNode {
    FakeNode::leaf(COUNT_SELECTOR, text)
}

/// One item block with a title link and one two-line attribute group per
/// `(label, value)` pair.
pub fn bike_block(title: &str, attrs: &[(&str, &str)]) -> FakeNode {
    let mut children = vec![FakeNode::leaf(TITLE_SELECTOR, title)];
    for (label, value) in attrs {
        children.push(FakeNode::parent(
            ATTR_LIST_SELECTOR,
            vec![
                FakeNode::leaf(ATTR_ITEM_SELECTOR, label),
                FakeNode::leaf(ATTR_ITEM_SELECTOR, value),
            ],
        ));
    }
    FakeNode::parent(BIKE_BOX_SELECTOR, children)
}

#[derive(Default)]
pub struct FakeBrowser {
    pages: HashMap<String, Vec<FakeNode>>,
    current: Vec<FakeNode>,
    pub visited: Vec<String>,
    pub failures_before_success: u32,
}

impl FakeBrowser {
    pub fn with_page(mut self, url: &str, roots: Vec<FakeNode>) -> Self {
        self.pages.insert(url.to_owned(), roots);
        self
    }
}

#[async_trait]
impl DomSession for FakeBrowser {
    type Node = FakeNode;

    async fn goto(&mut self, url: &str) -> Result<(), DomError> {
        self.visited.push(url.to_owned());
        if self.failures_before_success > 0 {
            self.failures_before_success -= 1;
            return Err(DomError::Navigation(format!("fake outage: {url}")));
        }
        match self.pages.get(url) {
            Some(roots) => {
                self.current = roots.clone();
                Ok(())
            }
            None => Err(DomError::Navigation(format!("no such page: {url}"))),
        }
    }

    async fn query_all(
        &self,
        scope: Option<&FakeNode>,
        selector: &str,
    ) -> Result<Vec<FakeNode>, DomError> {
        let mut out = Vec::new();
        match scope {
            Some(node) => node.collect_matches(selector, &mut out),
            None => {
                for root in &self.current {
                    if root.selectors.contains(&selector) {
                        out.push(root.clone());
                    }
                    root.collect_matches(selector, &mut out);
                }
            }
        }
        Ok(out)
    }

    async fn text_content(&self, node: &FakeNode) -> Result<String, DomError> {
        Ok(node.text.clone())
    }
}
