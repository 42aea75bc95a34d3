use crate::scoring::tables::KeywordsTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 8;
pub const LABEL: &str = "Keyword Relevance";

pub fn evaluate(doc: &ParsedDocument, table: &KeywordsTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let ai_terms = table.ai_terms.count_in(text);
    if ai_terms >= 3 {
        result.pass(4, format!("Strong AI topic coverage ({} terms)", ai_terms));
    } else if ai_terms >= 1 {
        result.pass(2, format!("Some AI topic coverage ({} terms)", ai_terms));
    } else {
        result.fail("No AI-related terminology");
    }

    let tech_terms = table.tech_terms.count_in(text);
    result.check(
        tech_terms >= 3,
        2,
        format!("Technology vocabulary present ({} terms)", tech_terms),
        format!("Limited technology vocabulary ({} terms)", tech_terms),
    );

    result.check(
        table.educational_phrases.any_in(text),
        2,
        "Educational framing (guide, tutorial, how-to)",
        "No educational framing",
    );

    result
}
