use crate::scoring::tables::AuthorTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 8;
pub const LABEL: &str = "Author Authority";

pub fn evaluate(doc: &ParsedDocument, table: &AuthorTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let has_byline = doc.count_any(&table.author_selectors) > 0
        || table.attribution_phrases.any_in(text);
    result.check(
        has_byline,
        4,
        "Author attribution found",
        "No author attribution",
    );

    result.check(
        table.bio_keywords.any_in(text),
        2,
        "Author bio or credentials present",
        "No author bio or credentials",
    );

    let expertise = table.expertise_keywords.matched(text);
    result.check(
        !expertise.is_empty(),
        2,
        format!("Expertise signals: {}", expertise.join(", ")),
        "No expertise signals",
    );

    result
}
