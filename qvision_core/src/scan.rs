//! Mock mammogram analysis.
//!
//! Produces a plausible-looking [`MammogramAnalysis`] from a seed. There is no
//! image processing here: the same seed always yields the same record.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::{Finding, MammogramAnalysis, QuantumMetrics, RiskLevel};

const REGIONS: &[&str] = &[
    "Upper outer quadrant",
    "Upper inner quadrant",
    "Lower outer quadrant",
    "Lower inner quadrant",
    "Retroareolar",
    "Axillary tail",
];

const FINDING_TYPES: &[&str] = &[
    "Microcalcification cluster",
    "Architectural distortion",
    "Focal asymmetry",
    "Spiculated mass",
    "Circumscribed mass",
];

const FEATURE_TAGS: &[&str] = &[
    "ZZ-phase texture correlation",
    "Entangled GLCM contrast",
    "Quantum kernel edge density",
    "VQE energy minimum shift",
    "Amplitude-encoded intensity skew",
    "Bell-pair symmetry break",
];

/// Input to one mock scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub image_url: Option<String>,
}

impl ScanRequest {
    pub fn new(id: impl Into<String>, timestamp: impl Into<String>, seed: u64) -> Self {
        Self {
            id: id.into(),
            timestamp: timestamp.into(),
            seed,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Derive a seed from an uploaded file's name and size.
pub fn seed_for_upload(name: &str, size: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    size.hash(&mut hasher);
    hasher.finish()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Generate the analysis for `request`.
pub fn analyze(request: &ScanRequest) -> MammogramAnalysis {
    let mut rng = SmallRng::seed_from_u64(request.seed);

    let risk_score = round3(rng.gen_range(0.05..0.95));
    let risk_level = RiskLevel::from_score(risk_score);

    let count = rng.gen_range(2..=4);
    let mut regions = REGIONS.to_vec();
    regions.shuffle(&mut rng);

    let mut findings: Vec<Finding> = regions
        .into_iter()
        .take(count)
        .map(|region| {
            let kind = FINDING_TYPES.choose(&mut rng).copied().unwrap_or("Focal asymmetry");
            let probability = round3((risk_score * rng.gen_range(0.5..1.2)).clamp(0.01, 0.99));
            Finding {
                region: region.to_string(),
                probability,
                kind: kind.to_string(),
            }
        })
        .collect();
    findings.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    let quantum_metrics = QuantumMetrics {
        entanglement_entropy: round3(rng.gen_range(0.4..2.0)),
        coherence_time: format!("{}µs", rng.gen_range(40..=120)),
        circuit_depth: rng.gen_range(24..=96),
    };

    let mut tags = FEATURE_TAGS.to_vec();
    tags.shuffle(&mut rng);
    let features = tags.into_iter().take(3).map(str::to_string).collect();

    tracing::debug!(
        id = %request.id,
        seed = request.seed,
        risk = %risk_level,
        findings = findings.len(),
        "mock scan generated"
    );

    MammogramAnalysis {
        id: request.id.clone(),
        image_url: request.image_url.clone(),
        risk_score,
        risk_level,
        timestamp: request.timestamp.clone(),
        findings,
        quantum_metrics: Some(quantum_metrics),
        features: Some(features),
        notes: Some(notes_for(risk_level).to_string()),
    }
}

fn notes_for(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "No suspicious patterns above threshold. Continue routine screening.",
        RiskLevel::Intermediate => {
            "Minor correlated texture anomalies. Compare against prior imaging at next screening."
        }
        RiskLevel::Elevated => {
            "Correlated anomalies in multiple regions. Recommend supplemental ultrasound."
        }
        RiskLevel::High => {
            "Strong entangled-feature signal. Recommend diagnostic work-up and radiologist review."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_seed_same_analysis() {
        let request = ScanRequest::new("QA-1", "t0", 42);
        assert_eq!(analyze(&request), analyze(&request));
    }

    #[test]
    fn analysis_is_internally_consistent() {
        for seed in 0..64 {
            let analysis = analyze(&ScanRequest::new("QA", "t0", seed));
            assert!((0.05..=0.95).contains(&analysis.risk_score), "seed {seed}");
            assert_eq!(analysis.risk_level, RiskLevel::from_score(analysis.risk_score));
            assert!((2..=4).contains(&analysis.findings.len()), "seed {seed}");
            assert!(
                analysis
                    .findings
                    .windows(2)
                    .all(|w| w[0].probability >= w[1].probability),
                "findings sorted by probability, seed {seed}"
            );
            assert!(
                analysis
                    .findings
                    .iter()
                    .all(|f| (0.01..=0.99).contains(&f.probability))
            );
            assert_eq!(analysis.features.as_ref().map(Vec::len), Some(3));
            assert!(analysis.notes.is_some());
        }
    }

    #[test]
    fn regions_are_distinct() {
        let analysis = analyze(&ScanRequest::new("QA", "t0", 7));
        let mut regions: Vec<&str> = analysis.findings.iter().map(|f| f.region.as_str()).collect();
        regions.sort_unstable();
        regions.dedup();
        assert_eq!(regions.len(), analysis.findings.len());
    }

    #[test]
    fn carries_request_fields() {
        let request = ScanRequest::new("QA-9", "2025-03-01T10:00:00Z", 9)
            .with_image_url("blob:scan");
        let analysis = analyze(&request);
        assert_eq!(analysis.id, "QA-9");
        assert_eq!(analysis.timestamp, "2025-03-01T10:00:00Z");
        assert_eq!(analysis.image_url.as_deref(), Some("blob:scan"));
    }

    #[test]
    fn upload_seed_depends_on_name_and_size() {
        assert_eq!(seed_for_upload("a.png", 10), seed_for_upload("a.png", 10));
        assert_ne!(seed_for_upload("a.png", 10), seed_for_upload("a.png", 11));
        assert_ne!(seed_for_upload("a.png", 10), seed_for_upload("b.png", 10));
    }
}
