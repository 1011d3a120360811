//! Ordered first-match-wins rule evaluation over a feature record.
//!
//! The rule list is fixed at compile time and evaluated top to bottom; the
//! final catch-all rule guarantees every record produces a recommendation.
//! Ordering is the tie-break mechanism — there is no scoring or weighting.

use landplan_core::FeatureRecord;
use serde::Serialize;

/// One entry in the ordered rule list.
///
/// Plain fn pointers keep the condition data-like without dynamic dispatch.
struct Rule {
    condition: fn(&FeatureRecord) -> bool,
    recommendation: &'static str,
    reason: &'static str,
}

/// The label and reason of the first matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub recommendation: &'static str,
    pub reason: &'static str,
}

/// Evaluation order is part of the contract. The "Public Park" rule is
/// unreachable while the extractor reports the assumed constant area of
/// 1500 m²; it is kept verbatim rather than silently removed or repaired.
/// The last rule's condition is always true.
const RULES: &[Rule] = &[
    Rule {
        condition: |f| f.amenities >= 3 && f.road_dist_m <= 50.0,
        recommendation: "Mixed-use Development",
        reason: "High commercial potential with good transport access",
    },
    Rule {
        condition: |f| f.area_m2 > 2000.0,
        recommendation: "Public Park",
        reason: "Large space suitable for green infrastructure",
    },
    Rule {
        condition: |_| true,
        recommendation: "Residential Housing",
        reason: "General urban expansion needs",
    },
];

/// Returns the recommendation of the first rule whose condition holds.
///
/// Total over well-formed records: the trailing catch-all always matches.
#[must_use]
pub fn analyze(features: &FeatureRecord) -> Recommendation {
    let rule = RULES
        .iter()
        .find(|rule| (rule.condition)(features))
        .unwrap_or(&RULES[RULES.len() - 1]);
    Recommendation {
        recommendation: rule.recommendation,
        reason: rule.reason,
    }
}
