use crate::scoring::tables::CredibilityTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;

pub const MAX: u32 = 15;
pub const LABEL: &str = "Credibility Signals";

/// 4 points at `strong` matches, 2 at `weak`, otherwise none.
fn tiered(count: usize, strong: usize, weak: usize) -> u32 {
    if count >= strong {
        4
    } else if count >= weak {
        2
    } else {
        0
    }
}

fn record(result: &mut CriterionResult, points: u32, count: usize, what: &str) {
    if points > 0 {
        result.pass(points, format!("{} {} found", count, what));
    } else {
        result.fail(format!("No {} found", what));
    }
}

pub fn evaluate(doc: &ParsedDocument, table: &CredibilityTable) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let citations = table.citation_phrases.count_in(text);
    record(&mut result, tiered(citations, 3, 1), citations, "source citations");

    let statistics = table.statistics_phrases.count_in(text);
    record(&mut result, tiered(statistics, 3, 1), statistics, "statistics");

    let academic = table.academic_signals.count_in(text);
    record(&mut result, tiered(academic, 2, 1), academic, "academic references");

    let fact_checks = table.fact_check_signals.count_in(text);
    result.check(
        fact_checks >= 2,
        3,
        format!("{} fact-checking signals found", fact_checks),
        "Few fact-checking signals",
    );

    result
}
