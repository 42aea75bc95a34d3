use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One pass/fail note attached to a criterion evaluation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Finding {
    pub passed: bool,
    pub message: String,
}

impl Finding {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Score for a single criterion.
///
/// `score` never exceeds `max`; evaluators build one through [`CriterionResult::new`]
/// and [`CriterionResult::award`], which clamp on every addition.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CriterionResult {
    pub label: String,
    pub score: u32,
    pub max: u32,
    pub findings: Vec<Finding>,
}

impl CriterionResult {
    pub fn new(label: &str, max: u32) -> Self {
        Self {
            label: label.to_string(),
            score: 0,
            max,
            findings: Vec::new(),
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points).min(self.max);
    }

    pub fn pass(&mut self, points: u32, message: impl Into<String>) {
        self.award(points);
        self.findings.push(Finding::pass(message));
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.findings.push(Finding::fail(message));
    }

    /// Records a pass worth `points` when `ok`, otherwise a fail.
    pub fn check(
        &mut self,
        ok: bool,
        points: u32,
        pass_msg: impl Into<String>,
        fail_msg: impl Into<String>,
    ) {
        if ok {
            self.pass(points, pass_msg);
        } else {
            self.fail(fail_msg);
        }
    }
}

/// The ten criterion results, by name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CriterionScores {
    pub structure: CriterionResult,
    pub author: CriterionResult,
    pub metadata: CriterionResult,
    pub keywords: CriterionResult,
    pub tone: CriterionResult,
    pub credibility: CriterionResult,
    pub readability: CriterionResult,
    pub freshness: CriterionResult,
    pub comprehensiveness: CriterionResult,
    pub citations: CriterionResult,
}

impl CriterionScores {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CriterionResult)> {
        [
            ("structure", &self.structure),
            ("author", &self.author),
            ("metadata", &self.metadata),
            ("keywords", &self.keywords),
            ("tone", &self.tone),
            ("credibility", &self.credibility),
            ("readability", &self.readability),
            ("freshness", &self.freshness),
            ("comprehensiveness", &self.comprehensiveness),
            ("citations", &self.citations),
        ]
        .into_iter()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalysisResult {
    pub url: String,
    pub scores: CriterionScores,
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub recommendations: Vec<String>,
    pub research_insights: Vec<String>,
    pub analyzed_at: String,
}
