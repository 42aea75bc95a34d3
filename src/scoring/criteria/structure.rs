use crate::scoring::tables::StructureTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 10;
pub const LABEL: &str = "Content Structure";

pub(crate) const HEADINGS: &str = "h1, h2, h3, h4, h5, h6";
pub(crate) const LISTS: &str = "ul, ol";
pub(crate) const PARAGRAPHS: &str = "p";

const MIN_HEADINGS: usize = 3;
const MIN_LISTS: usize = 2;
const MIN_PARAGRAPHS_EXCLUSIVE: usize = 5;
const MIN_MARKUP_CHARS_EXCLUSIVE: usize = 2000;

pub fn evaluate(doc: &ParsedDocument, table: &StructureTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);

    let headings = doc.count(HEADINGS);
    result.check(
        headings >= MIN_HEADINGS,
        3,
        format!("{} headings organize the content", headings),
        format!("Only {} headings found (3+ recommended)", headings),
    );

    let lists = doc.count(LISTS);
    result.check(
        lists >= MIN_LISTS,
        2,
        format!("{} lists break up the content", lists),
        format!("Only {} lists found (2+ recommended)", lists),
    );

    let paragraphs = doc.count(PARAGRAPHS);
    result.check(
        paragraphs > MIN_PARAGRAPHS_EXCLUSIVE,
        2,
        format!("{} paragraphs of body content", paragraphs),
        format!("Only {} paragraphs found (more than 5 recommended)", paragraphs),
    );

    result.check(
        table.contents_phrases.any_in(doc.text()),
        2,
        "Table of contents present",
        "No table of contents",
    );

    result.check(
        doc.markup().chars().count() > MIN_MARKUP_CHARS_EXCLUSIVE,
        1,
        "Substantial page markup",
        "Very little page markup",
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::ScoringTables;
    use crate::scraping::document::fixture::FixtureDocument;
    use url::Url;

    #[test]
    fn bare_document_scores_zero() {
        let doc = FixtureDocument::default()
            .with_count(PARAGRAPHS, 5)
            .into_parsed("<p>short</p>", "short");
        let result = evaluate(&doc, &ScoringTables::builtin().structure);
        assert_eq!(result.score, 0);
        assert!(result.findings.iter().all(|f| !f.passed));
    }

    #[test]
    fn well_structured_document_scores_max() {
        let markup = "x".repeat(2001);
        let doc = FixtureDocument::default()
            .with_count(HEADINGS, 4)
            .with_count(LISTS, 2)
            .with_count(PARAGRAPHS, 6)
            .into_parsed(&markup, "Table of Contents: intro, body, end");
        let result = evaluate(&doc, &ScoringTables::builtin().structure);
        assert_eq!(result.score, MAX);
    }

    #[test]
    fn markup_threshold_is_exclusive() {
        let tables = ScoringTables::builtin();
        let at = FixtureDocument::default().into_parsed(&"x".repeat(2000), "");
        let over = FixtureDocument::default().into_parsed(&"x".repeat(2001), "");
        assert_eq!(evaluate(&at, &tables.structure).score, 0);
        assert_eq!(evaluate(&over, &tables.structure).score, 1);
    }

    #[test]
    fn counts_real_headings_and_lists() {
        let html = "<html><body><h1>A</h1><h2>B</h2><h3>C</h3>\
                    <ul><li>1</li></ul><ol><li>2</li></ol></body></html>";
        let doc = ParsedDocument::parse(html, Url::parse("https://example.com").unwrap());
        let result = evaluate(&doc, &ScoringTables::builtin().structure);
        assert_eq!(result.score, 5);
    }
}
