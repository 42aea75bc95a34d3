use crate::scoring::tables::CitationsTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 10;
pub const LABEL: &str = "Citations & Sources";

pub fn evaluate(doc: &ParsedDocument, table: &CitationsTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);

    let external = doc.external_link_count();
    if external >= 5 {
        result.pass(4, format!("{} links to external sources", external));
    } else if external >= 2 {
        result.pass(2, format!("{} links to external sources", external));
    } else {
        result.fail(format!("Only {} external links (5+ recommended)", external));
    }

    let formal = table.formal_citation_phrases.count_in(doc.text());
    result.check(
        formal >= 2,
        3,
        format!("Formal citations present ({} signals)", formal),
        "No formal citation format",
    );

    let quote_pairs = doc.visible_text().matches('"').count() / 2;
    if quote_pairs >= 3 {
        result.pass(3, format!("{} direct quotations", quote_pairs));
    } else if quote_pairs >= 1 {
        result.pass(1, format!("{} direct quotations", quote_pairs));
    } else {
        result.fail("No direct quotations");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::tables::ScoringTables;
    use crate::scraping::document::fixture::FixtureDocument;

    const EXTERNAL: [&str; 6] = [
        "https://arxiv.org/abs/1",
        "https://nature.com/a",
        "https://acm.org/b",
        "https://ieee.org/c",
        "https://mit.edu/d",
        "https://stanford.edu/e",
    ];

    #[test]
    fn links_only_scores_four() {
        let doc = FixtureDocument::default()
            .with_links(&EXTERNAL)
            .into_parsed("", "Plain text without sources");
        let result = evaluate(&doc, &ScoringTables::builtin().citations);
        assert_eq!(result.score, 4);
        assert_eq!(result.max, 10);
    }

    #[test]
    fn internal_links_do_not_count() {
        let doc = FixtureDocument::default()
            .with_links(&["/a", "/b", "https://example.com/c", "https://arxiv.org/x"])
            .into_parsed("", "");
        assert_eq!(evaluate(&doc, &ScoringTables::builtin().citations).score, 0);
    }

    #[test]
    fn quotes_are_counted_in_pairs() {
        let one = FixtureDocument::default().into_parsed("", r#"He said "yes" and "#);
        let three = FixtureDocument::default()
            .into_parsed("", r#""a" then "b" then "c" and a stray ""#);
        let tables = ScoringTables::builtin();
        assert_eq!(evaluate(&one, &tables.citations).score, 1);
        assert_eq!(evaluate(&three, &tables.citations).score, 3);
    }

    #[test]
    fn fully_cited_page_scores_max() {
        let doc = FixtureDocument::default()
            .with_links(&EXTERNAL)
            .into_parsed(
                "",
                r#"Smith et al. [1] wrote "x", "y" and "z". References: doi:10.1/abc"#,
            );
        assert_eq!(evaluate(&doc, &ScoringTables::builtin().citations).score, MAX);
    }
}
