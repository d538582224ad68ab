//! Result records produced by the survey and scan collaborators.
//!
//! These types define the data threaded through the shell. They're designed to be:
//!
//! - **Serializable** - camelCase JSON matching the browser-side records
//! - **Clone-friendly** - components can take owned copies without borrowing issues
//! - **Unvalidated** - the controller stores whatever a producer hands it
//!
//! # Example
//!
//! ```rust
//! use qvision_core::types::{Factor, RiskLevel, SurveyResult};
//!
//! let result = SurveyResult {
//!     id: "QS-1".into(),
//!     timestamp: "2025-03-01T10:00:00Z".into(),
//!     risk_level: RiskLevel::High,
//!     risk_score: 0.9,
//!     factors: vec![Factor::new("age", "55")],
//! };
//! assert!(result.risk_level > RiskLevel::Elevated);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered risk bucket shared by both result kinds.
///
/// Ordering follows severity: `Low < Intermediate < Elevated < High`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Intermediate,
    Elevated,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Intermediate,
        RiskLevel::Elevated,
        RiskLevel::High,
    ];

    /// Bucket a 0-1 score. Out-of-range scores saturate; NaN is `Low`.
    pub fn from_score(score: f64) -> Self {
        if score.is_nan() || score < 0.25 {
            RiskLevel::Low
        } else if score < 0.50 {
            RiskLevel::Intermediate
        } else if score < 0.75 {
            RiskLevel::Elevated
        } else {
            RiskLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Intermediate => "Intermediate",
            RiskLevel::Elevated => "Elevated",
            RiskLevel::High => "High",
        }
    }

    /// CSS modifier used by both renderers (`risk-low`, `risk-high`, ...).
    pub fn css_class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Intermediate => "risk-intermediate",
            RiskLevel::Elevated => "risk-elevated",
            RiskLevel::High => "risk-high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One answered questionnaire item, as shown in the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub value: String,
}

impl Factor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Outcome of the risk-assessment questionnaire.
///
/// Internally there is a single required `timestamp`. On the wire the record
/// also carries the legacy `date` field: deserialization takes `timestamp`
/// and falls back to `date`, serialization writes both.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SurveyResultWire", into = "SurveyResultWire")]
pub struct SurveyResult {
    pub id: String,
    pub timestamp: String,
    pub risk_level: RiskLevel,
    /// Nominally 0-1; not validated.
    pub risk_score: f64,
    pub factors: Vec<Factor>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurveyResultWire {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    risk_level: RiskLevel,
    risk_score: f64,
    factors: Vec<Factor>,
}

impl TryFrom<SurveyResultWire> for SurveyResult {
    type Error = Error;

    fn try_from(wire: SurveyResultWire) -> Result<Self, Self::Error> {
        let Some(timestamp) = wire.timestamp.or(wire.date) else {
            return Err(Error::MissingTimestamp { id: wire.id });
        };
        Ok(Self {
            id: wire.id,
            timestamp,
            risk_level: wire.risk_level,
            risk_score: wire.risk_score,
            factors: wire.factors,
        })
    }
}

impl From<SurveyResult> for SurveyResultWire {
    fn from(result: SurveyResult) -> Self {
        Self {
            id: result.id,
            date: Some(result.timestamp.clone()),
            timestamp: Some(result.timestamp),
            risk_level: result.risk_level,
            risk_score: result.risk_score,
            factors: result.factors,
        }
    }
}

/// A suspicious region reported by a scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub region: String,
    pub probability: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantumMetrics {
    pub entanglement_entropy: f64,
    /// Display string, e.g. `"87µs"`.
    pub coherence_time: String,
    pub circuit_depth: u32,
}

/// Outcome of a (mock) mammogram scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MammogramAnalysis {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Nominally 0-1; not validated.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub timestamp: String,
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum_metrics: Option<QuantumMetrics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Which result slot a report is drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    #[default]
    Survey,
    Mammogram,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Survey => "survey",
            ReportKind::Mammogram => "mammogram",
        }
    }

    /// Heading used by the report renderers.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Survey => "Risk Assessment Report",
            ReportKind::Mammogram => "Quantum Scan Report",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of the report selected for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActiveReport<'a> {
    Survey(&'a SurveyResult),
    Mammogram(&'a MammogramAnalysis),
}

impl ActiveReport<'_> {
    pub fn kind(&self) -> ReportKind {
        match self {
            ActiveReport::Survey(_) => ReportKind::Survey,
            ActiveReport::Mammogram(_) => ReportKind::Mammogram,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ActiveReport::Survey(r) => &r.id,
            ActiveReport::Mammogram(a) => &a.id,
        }
    }

    pub fn timestamp(&self) -> &str {
        match self {
            ActiveReport::Survey(r) => &r.timestamp,
            ActiveReport::Mammogram(a) => &a.timestamp,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self {
            ActiveReport::Survey(r) => r.risk_level,
            ActiveReport::Mammogram(a) => a.risk_level,
        }
    }

    pub fn risk_score(&self) -> f64 {
        match self {
            ActiveReport::Survey(r) => r.risk_score,
            ActiveReport::Mammogram(a) => a.risk_score,
        }
    }

    pub fn to_data(&self) -> ReportData {
        match self {
            ActiveReport::Survey(r) => ReportData::Survey((*r).clone()),
            ActiveReport::Mammogram(a) => ReportData::Mammogram((*a).clone()),
        }
    }
}

/// Owned report payload handed to renderers.
///
/// Serializes as `{"kind": "survey" | "mammogram", "data": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum ReportData {
    Survey(SurveyResult),
    Mammogram(MammogramAnalysis),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        self.as_active().kind()
    }

    pub fn as_active(&self) -> ActiveReport<'_> {
        match self {
            ReportData::Survey(r) => ActiveReport::Survey(r),
            ReportData::Mammogram(a) => ActiveReport::Mammogram(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn risk_levels_are_ordered() {
        assert!(RiskLevel::Low < RiskLevel::Intermediate);
        assert!(RiskLevel::Intermediate < RiskLevel::Elevated);
        assert!(RiskLevel::Elevated < RiskLevel::High);
        assert_eq!(RiskLevel::ALL.iter().max(), Some(&RiskLevel::High));
    }

    #[test]
    fn score_buckets() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.25), RiskLevel::Intermediate);
        assert_eq!(RiskLevel::from_score(0.5), RiskLevel::Elevated);
        assert_eq!(RiskLevel::from_score(0.75), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(3.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(-1.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn survey_accepts_legacy_date_field() {
        let value = json!({
            "id": "QS-7",
            "date": "2025-01-02",
            "riskLevel": "Elevated",
            "riskScore": 0.6,
            "factors": [{"name": "Age", "value": "50-59"}]
        });
        let result: SurveyResult = serde_json::from_value(value).expect("legacy survey");
        assert_eq!(result.timestamp, "2025-01-02");
        assert_eq!(result.risk_level, RiskLevel::Elevated);
        assert_eq!(result.factors, vec![Factor::new("Age", "50-59")]);
    }

    #[test]
    fn survey_prefers_timestamp_over_date() {
        let value = json!({
            "id": "QS-8",
            "date": "old",
            "timestamp": "new",
            "riskLevel": "Low",
            "riskScore": 0.1,
            "factors": []
        });
        let result: SurveyResult = serde_json::from_value(value).expect("survey");
        assert_eq!(result.timestamp, "new");
    }

    #[test]
    fn survey_without_any_time_is_rejected() {
        let value = json!({
            "id": "QS-9",
            "riskLevel": "Low",
            "riskScore": 0.1,
            "factors": []
        });
        let err = serde_json::from_value::<SurveyResult>(value).unwrap_err();
        assert!(err.to_string().contains("QS-9"));
    }

    #[test]
    fn survey_serializes_both_time_names() {
        let result = SurveyResult {
            id: "QS-1".into(),
            timestamp: "t0".into(),
            risk_level: RiskLevel::High,
            risk_score: 0.9,
            factors: vec![],
        };
        let value = serde_json::to_value(&result).expect("serialize");
        assert_eq!(value["date"], "t0");
        assert_eq!(value["timestamp"], "t0");
        assert_eq!(value["riskLevel"], "High");
    }

    #[test]
    fn finding_kind_uses_type_on_the_wire() {
        let value = json!({"region": "Retroareolar", "probability": 0.4, "type": "Focal asymmetry"});
        let finding: Finding = serde_json::from_value(value).expect("finding");
        assert_eq!(finding.kind, "Focal asymmetry");
    }

    #[test]
    fn analysis_optional_fields_default_to_none() {
        let value = json!({
            "id": "QA-1",
            "riskScore": 0.3,
            "riskLevel": "Intermediate",
            "timestamp": "t1",
            "findings": []
        });
        let analysis: MammogramAnalysis = serde_json::from_value(value).expect("analysis");
        assert_eq!(analysis.image_url, None);
        assert_eq!(analysis.quantum_metrics, None);
        assert_eq!(analysis.features, None);
        assert_eq!(analysis.notes, None);
    }

    #[test]
    fn report_data_is_kind_tagged() {
        let data = ReportData::Mammogram(MammogramAnalysis {
            id: "QA-2".into(),
            ..Default::default()
        });
        let value = serde_json::to_value(&data).expect("serialize");
        assert_eq!(value["kind"], "mammogram");
        assert_eq!(value["data"]["id"], "QA-2");
        assert_eq!(data.kind(), ReportKind::Mammogram);
    }
}
