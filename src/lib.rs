#![forbid(unsafe_code)]

pub mod brands;
pub mod browser;
pub mod classify;
pub mod cli;
pub mod dom;
pub mod extract;
pub mod formats;
pub mod labels;
pub mod logging;
pub mod pagination;
pub mod scrape;
pub mod store;
