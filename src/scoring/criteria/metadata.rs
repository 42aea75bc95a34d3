use super::publish_date;
use crate::scoring::tables::MetadataTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 8;
pub const LABEL: &str = "Metadata Quality";

const MIN_TITLE_CHARS_EXCLUSIVE: usize = 10;
const MIN_DESCRIPTION_CHARS_EXCLUSIVE: usize = 50;

pub fn evaluate(doc: &ParsedDocument, table: &MetadataTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);

    let title_len = doc.title().chars().count();
    result.check(
        title_len > MIN_TITLE_CHARS_EXCLUSIVE,
        2,
        format!("Descriptive title ({} characters)", title_len),
        format!("Title missing or too short ({} characters)", title_len),
    );

    let description_len = doc.meta_description().chars().count();
    result.check(
        description_len > MIN_DESCRIPTION_CHARS_EXCLUSIVE,
        3,
        format!("Meta description present ({} characters)", description_len),
        format!(
            "Meta description missing or too short ({} characters, more than 50 recommended)",
            description_len
        ),
    );

    result.check(
        publish_date(doc, &table.publish_date_selectors).is_some(),
        2,
        "Publish date exposed in markup",
        "No machine-readable publish date",
    );

    result.check(
        table.structured_data_markers.any_in(doc.markup()),
        1,
        "Structured data (schema.org / JSON-LD) present",
        "No structured data",
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::ScoringTables;
    use crate::scraping::document::fixture::FixtureDocument;
    use url::Url;

    const DESCRIPTION: &str = "meta[name=\"description\"]";

    fn score_with_description(description: &str) -> u32 {
        let doc = FixtureDocument::default()
            .with_attr(DESCRIPTION, "content", description)
            .into_parsed("", "");
        evaluate(&doc, &ScoringTables::builtin().metadata).score
    }

    #[test]
    fn description_bonus_starts_above_fifty_chars() {
        assert_eq!(score_with_description(&"d".repeat(50)), 0);
        assert_eq!(score_with_description(&"d".repeat(51)), 3);
    }

    #[test]
    fn title_must_exceed_ten_chars() {
        let tables = ScoringTables::builtin();
        let short = FixtureDocument::default()
            .with_text("title", "Ten chars!")
            .into_parsed("", "");
        let long = FixtureDocument::default()
            .with_text("title", "Eleven char")
            .into_parsed("", "");
        assert_eq!(evaluate(&short, &tables.metadata).score, 0);
        assert_eq!(evaluate(&long, &tables.metadata).score, 2);
    }

    #[test]
    fn complete_metadata_scores_max() {
        let html = r#"<html><head>
            <title>Understanding Transformers in Depth</title>
            <meta name="description" content="A practical walkthrough of attention, positional encoding and training tricks.">
            <script type="application/ld+json">{"@context":"https://schema.org","@type":"Article"}</script>
            </head><body><time datetime="2024-05-01">May 1</time></body></html>"#;
        let doc = ParsedDocument::parse(html, Url::parse("https://example.com").unwrap());
        let result = evaluate(&doc, &ScoringTables::builtin().metadata);
        assert_eq!(result.score, MAX);
    }

    #[test]
    fn empty_datetime_attribute_is_not_a_date() {
        let doc = FixtureDocument::default()
            .with_attr("time[datetime]", "datetime", "")
            .into_parsed("", "");
        let tables = ScoringTables::builtin();
        assert!(publish_date(&doc, &tables.metadata.publish_date_selectors).is_none());
    }
}
