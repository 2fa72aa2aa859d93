//! The customer data model.
//!
//! A `Customer` carries a pre-assigned risk rating, AML flags, and
//! risk-factor explanations exactly as supplied. The rating is an opaque
//! label: it is never derived from the risk factors, and the two are never
//! reconciled even when they disagree.
//!
//! `aml_flags` and `risk_factors` are held as raw JSON values. Dataset
//! validation requires them to be sequences but does not inspect their
//! elements, so the stored data survives ingestion byte-for-byte even when
//! an element does not match the documented shapes below. `flag_details`
//! and `factor_details` give typed views over the well-formed elements.

use crate::types::CustomerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub city: String,
    pub risk_rating: RiskRating,
    pub credit_score: f64,
    pub account_balance: f64,
    pub transaction_volume: f64,
    pub aml_flags: Vec<Value>,
    pub risk_factors: Vec<Value>,
    pub join_date: String,
    pub last_activity: String,
}

impl Customer {
    /// Typed view of `aml_flags`. Elements that do not match the
    /// documented flag shape are skipped; well-formed elements keep their
    /// supplied order.
    pub fn flag_details(&self) -> Vec<AmlFlag> {
        self.aml_flags
            .iter()
            .filter_map(|raw| serde_json::from_value(raw.clone()).ok())
            .collect()
    }

    /// Typed view of `risk_factors`, same tolerance as `flag_details`.
    pub fn factor_details(&self) -> Vec<RiskFactor> {
        self.risk_factors
            .iter()
            .filter_map(|raw| serde_json::from_value(raw.clone()).ok())
            .collect()
    }

    /// `join_date` as a calendar date, when it parses as YYYY-MM-DD.
    pub fn join_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.join_date, "%Y-%m-%d").ok()
    }

    /// `last_activity` as a calendar date, when it parses as YYYY-MM-DD.
    pub fn last_activity_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.last_activity, "%Y-%m-%d").ok()
    }
}

/// Pre-assigned portfolio risk tier. Supplied with the data, never
/// computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskRating {
    High,
    Medium,
    Low,
}

impl RiskRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Documented shape of one `aml_flags` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmlFlag {
    pub id: String,
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub severity: Severity,
    pub description: String,
    pub date_detected: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagType {
    SuspiciousTransactions,
    HighRiskCountry,
    Pep,
    SanctionsMatch,
}

impl FlagType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuspiciousTransactions => "suspicious_transactions",
            Self::HighRiskCountry => "high_risk_country",
            Self::Pep => "pep",
            Self::SanctionsMatch => "sanctions_match",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Documented shape of one `risk_factors` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub id: String,
    pub category: FactorCategory,
    pub description: String,
    pub impact: FactorImpact,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Credit,
    Behavioral,
    Geographic,
    TransactionPattern,
}

impl FactorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Behavioral => "behavioral",
            Self::Geographic => "geographic",
            Self::TransactionPattern => "transaction_pattern",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorImpact {
    Positive,
    Negative,
}

impl FactorImpact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_with_flags(flags: Vec<Value>) -> Customer {
        Customer {
            id: "c-000001".into(),
            name: "Jane Roe".into(),
            city: "Denver, CO".into(),
            risk_rating: RiskRating::Medium,
            credit_score: 700.0,
            account_balance: 1000.0,
            transaction_volume: 500.0,
            aml_flags: flags,
            risk_factors: vec![],
            join_date: "2020-01-01".into(),
            last_activity: "2024-01-01".into(),
        }
    }

    #[test]
    fn flag_details_skips_malformed_elements() {
        let well_formed = json!({
            "id": "1",
            "type": "pep",
            "severity": "medium",
            "description": "Related to politically exposed person",
            "dateDetected": "2024-01-08"
        });
        let customer = customer_with_flags(vec![
            json!({"bogus": true}),
            well_formed,
            json!(42),
        ]);

        let details = customer.flag_details();
        assert_eq!(details.len(), 1, "only the well-formed flag should parse");
        assert_eq!(details[0].flag_type, FlagType::Pep);
        // The raw values are untouched by the typed view.
        assert_eq!(customer.aml_flags.len(), 3);
    }

    #[test]
    fn date_accessors_are_lenient() {
        let customer = customer_with_flags(vec![]);
        assert_eq!(
            customer.join_date_parsed(),
            NaiveDate::from_ymd_opt(2020, 1, 1)
        );

        let mut odd = customer_with_flags(vec![]);
        odd.last_activity = "sometime in January".into();
        assert_eq!(odd.last_activity_parsed(), None);
    }
}
