pub mod criteria;
pub mod tables;
pub mod terms;

pub use criteria::MAX_TOTAL;
pub use tables::ScoringTables;

use crate::scraping::ParsedDocument;
use crate::types::{AnalysisResult, CriterionScores};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Runs the ten criteria against a parsed page and aggregates the result.
#[derive(Clone)]
pub struct ScoringEngine {
    tables: Arc<ScoringTables>,
}

impl ScoringEngine {
    pub fn new(tables: Arc<ScoringTables>) -> Self {
        Self { tables }
    }

    /// Evaluates every criterion. `now` anchors the freshness criterion.
    pub fn score(&self, doc: &ParsedDocument, now: DateTime<Utc>) -> CriterionScores {
        let t = &self.tables;
        let scores = CriterionScores {
            structure: criteria::structure::evaluate(doc, &t.structure),
            author: criteria::author::evaluate(doc, &t.author),
            metadata: criteria::metadata::evaluate(doc, &t.metadata),
            keywords: criteria::keywords::evaluate(doc, &t.keywords),
            tone: criteria::tone::evaluate(doc, &t.tone),
            credibility: criteria::credibility::evaluate(doc, &t.credibility),
            readability: criteria::readability::evaluate(doc, &t.readability),
            freshness: criteria::freshness::evaluate(doc, &t.freshness, now),
            comprehensiveness: criteria::comprehensiveness::evaluate(doc, &t.comprehensiveness),
            citations: criteria::citations::evaluate(doc, &t.citations),
        };

        for (name, result) in scores.iter() {
            debug!("{}: {}/{}", name, result.score, result.max);
        }
        scores
    }

    pub fn analyze(&self, doc: &ParsedDocument, now: DateTime<Utc>) -> AnalysisResult {
        let scores = self.score(doc, now);
        let total_score = total(&scores);
        let recommendations = self.recommendations(&scores);

        AnalysisResult {
            url: doc.origin().to_string(),
            total_score,
            max_score: MAX_TOTAL,
            percentage: percentage(total_score),
            recommendations,
            research_insights: self
                .tables
                .research_insights
                .iter()
                .map(|s| s.to_string())
                .collect(),
            analyzed_at: now.to_rfc3339(),
            scores,
        }
    }

    /// One advisory per criterion scoring below its threshold, in table order.
    pub fn recommendations(&self, scores: &CriterionScores) -> Vec<String> {
        self.tables
            .advisories
            .iter()
            .filter(|advisory| {
                scores
                    .iter()
                    .find(|(name, _)| *name == advisory.criterion)
                    .is_some_and(|(_, result)| result.score < advisory.below)
            })
            .map(|advisory| advisory.advice.to_string())
            .collect()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringTables::builtin())
    }
}

pub fn total(scores: &CriterionScores) -> u32 {
    scores.iter().map(|(_, r)| r.score).sum()
}

pub fn percentage(total: u32) -> f64 {
    total as f64 * 100.0 / MAX_TOTAL as f64
}
