//! Deterministic synthetic portfolio generation using curated lists.
//!
//! Produces demo portfolios larger than the built-in six customers, and
//! fixture collections for tests. All generation is deterministic: same
//! seed and count, same portfolio.
//!
//! Generated flags and factors loosely follow each customer's assigned
//! rating so the data reads plausibly; the rating itself stays an opaque
//! supplied label and is never recomputed from the factors.

use crate::{
    customer::{Customer, FactorCategory, FactorImpact, FlagType, RiskRating, Severity},
    rng::DeskRng,
};
use chrono::{Days, NaiveDate};
use serde_json::{json, Value};

const FIRST_NAMES: &[&str] = &[
    "James", "Maria", "Robert", "Elena", "Michael", "Sofia", "David", "Priya", "Daniel", "Amara",
    "Thomas", "Yuki", "Carlos", "Hannah", "Ahmed", "Grace", "Nikolai", "Olivia", "Jean", "Mei",
    "Andrew", "Fatima", "Samuel", "Ingrid", "Victor", "Rosa", "Patrick", "Leila", "Marcus",
    "Chloe", "Rafael", "Anya", "Stephen", "Noor", "Gabriel", "Lucia", "Henrik", "Tara", "Omar",
    "Beatrice",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Chen", "Rodriguez", "Thompson", "Patel", "Wilson", "Garcia", "Kim",
    "Martinez", "Nguyen", "Petrov", "Dubois", "Santos", "Volkov", "Okafor", "Larsen", "Rossi",
    "Tanaka", "Novak", "Haddad", "Fernandez", "Kowalski", "Andersson", "Moreau", "Silva",
    "Ivanov", "Schmidt", "Costa", "Yamamoto", "Hansen", "Ferrari", "Nakamura", "Weber",
    "Almeida", "Johansson", "Ricci", "Vargas", "Lindholm", "Osei",
];

const CITIES: &[&str] = &[
    "New York, NY",
    "San Francisco, CA",
    "Miami, FL",
    "Chicago, IL",
    "Austin, TX",
    "Seattle, WA",
    "Denver, CO",
    "Boston, MA",
    "Atlanta, GA",
    "Phoenix, AZ",
    "Portland, OR",
    "Charlotte, NC",
];

const FLAG_TYPES: &[FlagType] = &[
    FlagType::SuspiciousTransactions,
    FlagType::HighRiskCountry,
    FlagType::Pep,
    FlagType::SanctionsMatch,
];

const FACTOR_TEMPLATES: &[(FactorCategory, FactorImpact, &str)] = &[
    (
        FactorCategory::Credit,
        FactorImpact::Positive,
        "Excellent credit history with consistent payments",
    ),
    (
        FactorCategory::Credit,
        FactorImpact::Positive,
        "Strong credit profile with long history",
    ),
    (
        FactorCategory::Credit,
        FactorImpact::Positive,
        "Good credit score with stable income",
    ),
    (
        FactorCategory::Credit,
        FactorImpact::Negative,
        "Average credit score with some missed payments",
    ),
    (
        FactorCategory::Credit,
        FactorImpact::Negative,
        "Poor credit score and payment history",
    ),
    (
        FactorCategory::Behavioral,
        FactorImpact::Positive,
        "Stable transaction patterns over 5+ years",
    ),
    (
        FactorCategory::Behavioral,
        FactorImpact::Positive,
        "Conservative spending patterns",
    ),
    (
        FactorCategory::Behavioral,
        FactorImpact::Negative,
        "Connection to politically exposed person",
    ),
    (
        FactorCategory::Behavioral,
        FactorImpact::Negative,
        "Account activity inconsistent with stated occupation",
    ),
    (
        FactorCategory::Geographic,
        FactorImpact::Negative,
        "Transactions to countries with weak AML controls",
    ),
    (
        FactorCategory::Geographic,
        FactorImpact::Negative,
        "Counterparties concentrated in high-risk jurisdictions",
    ),
    (
        FactorCategory::TransactionPattern,
        FactorImpact::Negative,
        "Irregular large cash deposits",
    ),
    (
        FactorCategory::TransactionPattern,
        FactorImpact::Negative,
        "Potential structuring behavior",
    ),
    (
        FactorCategory::TransactionPattern,
        FactorImpact::Negative,
        "Layering behavior with rapid fund movement",
    ),
];

pub struct PortfolioGenerator;

impl PortfolioGenerator {
    /// Generate `count` customers deterministically from `seed`.
    pub fn generate(seed: u64, count: usize) -> Vec<Customer> {
        let mut rng = DeskRng::new(seed);
        (0..count)
            .map(|index| Self::generate_customer(&mut rng, index))
            .collect()
    }

    fn generate_customer(rng: &mut DeskRng, index: usize) -> Customer {
        let name = format!("{} {}", rng.pick(FIRST_NAMES), rng.pick(LAST_NAMES));
        let city = (*rng.pick(CITIES)).to_string();

        let roll = rng.next_f64();
        let risk_rating = if roll < 0.25 {
            RiskRating::High
        } else if roll < 0.60 {
            RiskRating::Medium
        } else {
            RiskRating::Low
        };

        let credit_score = match risk_rating {
            RiskRating::High => rng.in_range(300.0, 620.0),
            RiskRating::Medium => rng.in_range(580.0, 730.0),
            RiskRating::Low => rng.in_range(680.0, 850.0),
        }
        .round();

        // Balances and volumes are heavy-tailed across a real book.
        let account_balance = round_cents(rng.pareto(2_500.0, 1.2).min(500_000.0));
        let transaction_volume = round_cents(rng.pareto(1_000.0, 1.1).min(250_000.0));

        let join_date = base_date()
            .checked_add_days(Days::new(rng.next_u64_below(3_000)))
            .unwrap_or_else(base_date);
        let last_activity = join_date
            .checked_add_days(Days::new(rng.next_u64_below(420)))
            .unwrap_or(join_date);

        let flag_count = match risk_rating {
            RiskRating::High => 1 + rng.next_u64_below(3),
            RiskRating::Medium => rng.next_u64_below(3),
            RiskRating::Low => u64::from(rng.chance(0.1)),
        };
        let aml_flags = (0..flag_count)
            .map(|n| Self::generate_flag(rng, n, risk_rating, join_date, last_activity))
            .collect();

        let factor_count = 1 + rng.next_u64_below(3);
        let negative_bias = match risk_rating {
            RiskRating::High => 0.9,
            RiskRating::Medium => 0.5,
            RiskRating::Low => 0.15,
        };
        let risk_factors = (0..factor_count)
            .map(|n| Self::generate_factor(rng, n, negative_bias))
            .collect();

        Customer {
            id: format!("c-{index:06}"),
            name,
            city,
            risk_rating,
            credit_score,
            account_balance,
            transaction_volume,
            aml_flags,
            risk_factors,
            join_date: join_date.format("%Y-%m-%d").to_string(),
            last_activity: last_activity.format("%Y-%m-%d").to_string(),
        }
    }

    fn generate_flag(
        rng: &mut DeskRng,
        ordinal: u64,
        rating: RiskRating,
        join_date: NaiveDate,
        last_activity: NaiveDate,
    ) -> Value {
        let flag_type = *rng.pick(FLAG_TYPES);
        let severity = match rating {
            RiskRating::High => {
                if rng.chance(0.7) {
                    Severity::High
                } else {
                    Severity::Medium
                }
            }
            RiskRating::Medium => {
                if rng.chance(0.3) {
                    Severity::High
                } else {
                    Severity::Medium
                }
            }
            RiskRating::Low => Severity::Low,
        };

        let span = (last_activity - join_date).num_days().max(0) as u64 + 1;
        let date_detected = join_date
            .checked_add_days(Days::new(rng.next_u64_below(span)))
            .unwrap_or(join_date);

        json!({
            "id": (ordinal + 1).to_string(),
            "type": flag_type.as_str(),
            "severity": severity.as_str(),
            "description": flag_description(rng, flag_type),
            "dateDetected": date_detected.format("%Y-%m-%d").to_string(),
        })
    }

    fn generate_factor(rng: &mut DeskRng, ordinal: u64, negative_bias: f64) -> Value {
        let impact = if rng.chance(negative_bias) {
            FactorImpact::Negative
        } else {
            FactorImpact::Positive
        };

        let candidates: Vec<&(FactorCategory, FactorImpact, &str)> = FACTOR_TEMPLATES
            .iter()
            .filter(|(_, template_impact, _)| *template_impact == impact)
            .collect();
        let (category, _, description) = **rng.pick(&candidates);

        let weight = (rng.in_range(0.3, 1.0) * 10.0).round() / 10.0;

        json!({
            "id": (ordinal + 1).to_string(),
            "category": category.as_str(),
            "description": description,
            "impact": impact.as_str(),
            "weight": weight,
        })
    }
}

fn flag_description(rng: &mut DeskRng, flag_type: FlagType) -> &'static str {
    let options: &[&str] = match flag_type {
        FlagType::SuspiciousTransactions => &[
            "Multiple large cash deposits detected",
            "Structuring detected near the reporting threshold",
            "Rapid movement of funds through multiple accounts",
            "Unusual wire activity inconsistent with profile",
        ],
        FlagType::HighRiskCountry => &[
            "Frequent transactions to high-risk jurisdictions",
            "Counterparties concentrated in weak AML jurisdictions",
        ],
        FlagType::Pep => &[
            "Related to politically exposed person",
            "Household member holds public office abroad",
        ],
        FlagType::SanctionsMatch => &[
            "Name similarity to sanctioned individual",
            "Partial match against consolidated sanctions list",
        ],
    };
    *rng.pick(options)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = PortfolioGenerator::generate(12345, 10);
        let b = PortfolioGenerator::generate(12345, 10);
        assert_eq!(a, b, "same seed should produce the same portfolio");
    }

    #[test]
    fn generates_two_part_names() {
        for customer in PortfolioGenerator::generate(7, 50) {
            let parts: Vec<&str> = customer.name.split_whitespace().collect();
            assert_eq!(parts.len(), 2, "name should have 2 parts: {}", customer.name);
        }
    }

    #[test]
    fn last_activity_never_precedes_join_date() {
        for customer in PortfolioGenerator::generate(42, 100) {
            let joined = customer.join_date_parsed();
            let active = customer.last_activity_parsed();
            assert!(joined.is_some(), "join date should parse: {}", customer.join_date);
            assert!(
                active >= joined,
                "activity {} precedes join {}",
                customer.last_activity,
                customer.join_date
            );
        }
    }
}
