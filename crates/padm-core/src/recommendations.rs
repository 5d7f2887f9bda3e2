//! Static clinical guidance keyed by risk tier.
//!
//! The bundles are fixed, ordered text reviewed with the clinical team;
//! the caller renders them verbatim. Only the High tier carries the
//! secondary immediate-considerations list.

use padm_model::{RecommendationBundle, RiskTier};

/// Look up the guidance bundle for a tier.
pub fn recommendations_for(tier: RiskTier) -> RecommendationBundle {
    match tier {
        RiskTier::Low => bundle(
            tier,
            "Low Risk Clinical Recommendations",
            &["Continue routine clinical monitoring"],
            None,
        ),
        RiskTier::Medium => bundle(
            tier,
            "Medium Risk Clinical Recommendations",
            &[
                "Increase monitoring frequency",
                "Consider monitoring of fibrin degradation products (FDP) and antithrombin III",
            ],
            None,
        ),
        RiskTier::High => bundle(
            tier,
            "High Risk Clinical Recommendations",
            &[
                "Immediate Action: Urgent consultation required",
                "STAT repeat coagulation panel, CBC, fibrinogen, renal and liver function",
                "Alert senior clinician, activate rapid response team if clinical deterioration",
                "Monitor for signs of microvascular thrombosis: digital ischemia, renal failure, \
                 altered mental status",
            ],
            Some(&[
                "Acute kidney injury",
                "ARDS",
                "Hepatic failure",
                "Cerebral ischemia",
            ]),
        ),
    }
}

fn bundle(
    tier: RiskTier,
    title: &str,
    actions: &[&str],
    immediate: Option<&[&str]>,
) -> RecommendationBundle {
    RecommendationBundle {
        tier,
        title: title.to_string(),
        actions: actions.iter().map(|a| (*a).to_string()).collect(),
        immediate_considerations: immediate
            .map(|items| items.iter().map(|i| (*i).to_string()).collect()),
    }
}
