//! Built-in vocabularies, phrase lists and advisory text used by the criteria.
//!
//! Everything here is fixed data: built once per process by
//! [`ScoringTables::builtin`] and handed to each evaluator explicitly.

use super::terms::TermSet;
use std::sync::{Arc, OnceLock};

pub struct StructureTable {
    pub contents_phrases: TermSet,
}

pub struct AuthorTable {
    pub author_selectors: Vec<&'static str>,
    pub attribution_phrases: TermSet,
    pub bio_keywords: TermSet,
    pub expertise_keywords: TermSet,
}

pub struct MetadataTable {
    pub publish_date_selectors: Vec<(&'static str, &'static str)>,
    pub structured_data_markers: TermSet,
}

pub struct KeywordsTable {
    pub ai_terms: TermSet,
    pub tech_terms: TermSet,
    pub educational_phrases: TermSet,
}

pub struct ToneTable {
    pub promotional_terms: TermSet,
    pub neutral_terms: TermSet,
}

pub struct CredibilityTable {
    pub citation_phrases: TermSet,
    pub statistics_phrases: TermSet,
    pub academic_signals: TermSet,
    pub fact_check_signals: TermSet,
}

pub struct ReadabilityTable {
    pub transition_words: TermSet,
    pub passive_markers: Vec<&'static str>,
}

pub struct FreshnessTable {
    pub publish_date_selectors: Vec<(&'static str, &'static str)>,
    pub recency_signals: TermSet,
}

pub struct ComprehensivenessTable {
    pub claim_phrases: TermSet,
    pub perspective_phrases: TermSet,
    pub example_phrases: TermSet,
}

pub struct CitationsTable {
    pub formal_citation_phrases: TermSet,
}

/// Advice emitted when a criterion scores below `below`.
pub struct Advisory {
    pub criterion: &'static str,
    pub below: u32,
    pub advice: &'static str,
}

pub struct ScoringTables {
    pub structure: StructureTable,
    pub author: AuthorTable,
    pub metadata: MetadataTable,
    pub keywords: KeywordsTable,
    pub tone: ToneTable,
    pub credibility: CredibilityTable,
    pub readability: ReadabilityTable,
    pub freshness: FreshnessTable,
    pub comprehensiveness: ComprehensivenessTable,
    pub citations: CitationsTable,
    pub advisories: Vec<Advisory>,
    pub research_insights: Vec<&'static str>,
}

/// `(selector, attribute)` pairs that carry a machine-readable publish date,
/// in order of preference.
const PUBLISH_DATE_SELECTORS: &[(&str, &str)] = &[
    ("meta[property=\"article:published_time\"]", "content"),
    ("meta[itemprop=\"datePublished\"]", "content"),
    ("meta[name=\"date\"]", "content"),
    ("meta[name=\"publish-date\"]", "content"),
    ("meta[name=\"pubdate\"]", "content"),
    ("time[datetime]", "datetime"),
];

pub const RESEARCH_INSIGHTS: &[&str] = &[
    "AI assistants favour pages with clear heading hierarchies that map cleanly onto questions and answers.",
    "Content with named, credentialed authors is cited more often than anonymous content.",
    "Pages that cite primary sources and include concrete statistics are more likely to be quoted verbatim.",
    "Recently updated pages are preferred for fast-moving topics; visible publish and update dates help.",
    "Neutral, evidence-based language outperforms promotional copy in AI-generated answers.",
    "Structured data (schema.org / JSON-LD) helps crawlers identify authorship, dates and topic.",
];

static BUILTIN: OnceLock<Arc<ScoringTables>> = OnceLock::new();

impl ScoringTables {
    /// Shared built-in tables, compiled on first use.
    pub fn builtin() -> Arc<ScoringTables> {
        BUILTIN.get_or_init(|| Arc::new(Self::build())).clone()
    }

    fn build() -> Self {
        Self {
            structure: StructureTable {
                contents_phrases: TermSet::phrases(&["table of contents", "contents"]),
            },
            author: AuthorTable {
                author_selectors: vec![
                    "meta[name=\"author\"]",
                    "[rel=\"author\"]",
                    "[itemprop=\"author\"]",
                    ".author",
                    ".byline",
                    ".author-name",
                    ".post-author",
                ],
                attribution_phrases: TermSet::phrases(&[
                    "written by",
                    "author:",
                    "by ",
                    "published by",
                ]),
                bio_keywords: TermSet::new(
                    &["bio", "credentials", "certified"],
                    &["about the author", "background in"],
                ),
                expertise_keywords: TermSet::phrases(&[
                    "expert",
                    "specialist",
                    "phd",
                    "professor",
                    "researcher",
                    "years of experience",
                ]),
            },
            metadata: MetadataTable {
                publish_date_selectors: PUBLISH_DATE_SELECTORS.to_vec(),
                structured_data_markers: TermSet::phrases(&[
                    "schema.org",
                    "application/ld+json",
                ]),
            },
            keywords: KeywordsTable {
                ai_terms: TermSet::words(&[
                    "artificial intelligence",
                    "machine learning",
                    "deep learning",
                    "neural network",
                    "ai",
                    "llm",
                    "large language model",
                    "chatgpt",
                    "generative ai",
                    "natural language processing",
                    "nlp",
                    "computer vision",
                    "transformer",
                    "algorithm",
                ]),
                tech_terms: TermSet::words(&[
                    "software",
                    "data",
                    "cloud",
                    "api",
                    "automation",
                    "digital",
                    "technology",
                    "platform",
                    "analytics",
                    "programming",
                ]),
                educational_phrases: TermSet::phrases(&[
                    "how to",
                    "guide",
                    "tutorial",
                    "tips",
                    "best practices",
                    "explained",
                ]),
            },
            tone: ToneTable {
                promotional_terms: TermSet::words(&[
                    "best",
                    "amazing",
                    "incredible",
                    "revolutionary",
                    "buy now",
                    "limited time",
                    "exclusive",
                    "guaranteed",
                    "unbeatable",
                    "game-changer",
                    "must-have",
                    "act now",
                ]),
                neutral_terms: TermSet::words(&[
                    "research",
                    "study",
                    "data",
                    "evidence",
                    "analysis",
                    "according to",
                    "findings",
                    "suggests",
                ]),
            },
            credibility: CredibilityTable {
                citation_phrases: TermSet::new(
                    &["cited", "reference"],
                    &[
                        "according to",
                        "research shows",
                        "studies show",
                        "study found",
                        "source:",
                        "published in",
                    ],
                ),
                statistics_phrases: TermSet::new(
                    &["percent", "statistics", "survey", "million", "billion"],
                    &["%", "data shows"],
                ),
                academic_signals: TermSet::new(
                    &["journal", "university", "doi", "study"],
                    &["peer-reviewed", "et al"],
                ),
                fact_check_signals: TermSet::new(
                    &["verified", "evidence", "confirmed"],
                    &["fact-check", "fact check"],
                ),
            },
            readability: ReadabilityTable {
                transition_words: TermSet::words(&[
                    "however",
                    "therefore",
                    "furthermore",
                    "moreover",
                    "additionally",
                    "consequently",
                    "in addition",
                    "for example",
                    "for instance",
                    "in contrast",
                    "similarly",
                    "finally",
                ]),
                passive_markers: vec![" is ", " are ", " was ", " were ", " be ", " been ", " by "],
            },
            freshness: FreshnessTable {
                publish_date_selectors: PUBLISH_DATE_SELECTORS.to_vec(),
                recency_signals: TermSet::words(&[
                    "updated",
                    "latest",
                    "recently",
                    "new",
                    "current",
                    "today",
                    "this year",
                ]),
            },
            comprehensiveness: ComprehensivenessTable {
                claim_phrases: TermSet::phrases(&[
                    "comprehensive",
                    "complete guide",
                    "ultimate guide",
                    "everything you need",
                    "in-depth",
                    "in depth",
                ]),
                perspective_phrases: TermSet::phrases(&[
                    "however",
                    "on the other hand",
                    "alternatively",
                    "pros and cons",
                    "advantages",
                    "disadvantages",
                    "in contrast",
                    "whereas",
                ]),
                example_phrases: TermSet::phrases(&[
                    "for example",
                    "for instance",
                    "such as",
                    "case study",
                    "e.g.",
                    "example:",
                ]),
            },
            citations: CitationsTable {
                formal_citation_phrases: TermSet::phrases(&[
                    "references",
                    "bibliography",
                    "works cited",
                    "footnote",
                    "[1]",
                    "doi:",
                    "et al.",
                    "retrieved from",
                ]),
            },
            advisories: vec![
                Advisory {
                    criterion: "structure",
                    below: 7,
                    advice: "Improve content structure: add clear headings (H1-H3), bulleted or numbered lists, and a table of contents.",
                },
                Advisory {
                    criterion: "author",
                    below: 5,
                    advice: "Add a visible author byline with a short bio and relevant credentials or expertise.",
                },
                Advisory {
                    criterion: "metadata",
                    below: 5,
                    advice: "Complete page metadata: a descriptive title, a meta description over 50 characters, a publish date and schema.org structured data.",
                },
                Advisory {
                    criterion: "keywords",
                    below: 5,
                    advice: "Use topic-relevant AI and technology terminology and frame content as a guide, tutorial or explainer.",
                },
                Advisory {
                    criterion: "tone",
                    below: 4,
                    advice: "Reduce promotional language and adopt a neutral, evidence-based tone.",
                },
                Advisory {
                    criterion: "credibility",
                    below: 8,
                    advice: "Strengthen credibility with cited sources, concrete statistics and references to academic research.",
                },
                Advisory {
                    criterion: "readability",
                    below: 8,
                    advice: "Improve readability: keep sentences between 10 and 20 words, use transition words and prefer active voice.",
                },
                Advisory {
                    criterion: "freshness",
                    below: 5,
                    advice: "Publish or update the content recently and expose the date in structured metadata.",
                },
                Advisory {
                    criterion: "comprehensiveness",
                    below: 5,
                    advice: "Expand coverage: go deeper on the topic, compare perspectives and include concrete examples.",
                },
                Advisory {
                    criterion: "citations",
                    below: 5,
                    advice: "Link to authoritative external sources, add a references section and quote experts directly.",
                },
            ],
            research_insights: RESEARCH_INSIGHTS.to_vec(),
        }
    }
}
