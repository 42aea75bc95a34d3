pub mod document;
pub mod fetcher;
pub mod headers;

pub use document::{DocumentQuery, HtmlDocument, ParsedDocument};
pub use fetcher::{FetchedPage, HttpFetcher, PageFetcher};
