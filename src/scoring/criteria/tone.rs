use crate::scoring::tables::ToneTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 6;
pub const LABEL: &str = "Neutral Tone";

const MAX_PROMOTIONAL: usize = 2;
const MIN_NEUTRAL: usize = 2;

pub fn evaluate(doc: &ParsedDocument, table: &ToneTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let promotional = table.promotional_terms.matched(text);
    result.check(
        promotional.len() <= MAX_PROMOTIONAL,
        3,
        format!("Low promotional language ({} terms)", promotional.len()),
        format!("Promotional language detected: {}", promotional.join(", ")),
    );

    let neutral = table.neutral_terms.count_in(text);
    result.check(
        neutral >= MIN_NEUTRAL,
        3,
        format!("Evidence-based vocabulary ({} terms)", neutral),
        format!("Little evidence-based vocabulary ({} terms)", neutral),
    );

    result
}
