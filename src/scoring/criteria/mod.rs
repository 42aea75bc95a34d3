//! The ten criterion evaluators. Each is a pure function of the parsed page
//! and its own table; none reads another's result.

pub mod author;
pub mod citations;
pub mod comprehensiveness;
pub mod credibility;
pub mod freshness;
pub mod keywords;
pub mod metadata;
pub mod readability;
pub mod structure;
pub mod tone;

use crate::scraping::ParsedDocument;

/// First non-empty publish-date attribute found, in selector order.
pub(crate) fn publish_date(doc: &ParsedDocument, selectors: &[(&str, &str)]) -> Option<String> {
    selectors
        .iter()
        .find_map(|(selector, attr)| doc.attr(selector, attr))
}

/// Sum of every criterion maximum.
pub const MAX_TOTAL: u32 = structure::MAX
    + author::MAX
    + metadata::MAX
    + keywords::MAX
    + tone::MAX
    + credibility::MAX
    + readability::MAX
    + freshness::MAX
    + comprehensiveness::MAX
    + citations::MAX;

const _: () = assert!(MAX_TOTAL == 100);
