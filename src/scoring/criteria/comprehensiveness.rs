use crate::scoring::tables::ComprehensivenessTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 10;
pub const LABEL: &str = "Comprehensiveness";

pub(crate) fn word_count_points(words: usize) -> u32 {
    match words {
        w if w >= 1500 => 4,
        w if w >= 800 => 3,
        w if w >= 400 => 2,
        _ => 0,
    }
}

pub fn evaluate(doc: &ParsedDocument, table: &ComprehensivenessTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let words = doc.word_count();
    let points = word_count_points(words);
    if points > 0 {
        result.pass(points, format!("{} words of content", words));
    } else {
        result.fail(format!("Only {} words (400+ recommended)", words));
    }

    result.check(
        table.claim_phrases.any_in(text),
        2,
        "Presents itself as in-depth coverage",
        "No in-depth coverage signals",
    );

    let perspectives = table.perspective_phrases.count_in(text);
    result.check(
        perspectives >= 2,
        2,
        format!("Covers multiple perspectives ({} signals)", perspectives),
        "Single perspective",
    );

    let examples = table.example_phrases.count_in(text);
    result.check(
        examples >= 2,
        2,
        format!("Illustrated with examples ({} signals)", examples),
        "Few concrete examples",
    );

    result
}
