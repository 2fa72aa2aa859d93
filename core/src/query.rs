//! Portfolio filtering and aggregate statistics.
//!
//! Both operations are pure functions of their inputs and cheap enough to
//! run on every keystroke. Statistics always describe the full collection,
//! never the filtered view.

use crate::customer::{Customer, RiskRating};
use serde::{Deserialize, Serialize};

/// The subset of `customers` whose name or city contains `query`,
/// case-insensitively. An empty query matches everything. Relative order
/// is preserved.
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.city.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Customer counts per risk tier. All three tiers are always present,
/// zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCounts {
    pub fn of(&self, rating: RiskRating) -> usize {
        match rating {
            RiskRating::High => self.high,
            RiskRating::Medium => self.medium,
            RiskRating::Low => self.low,
        }
    }
}

/// Aggregate statistics over a whole customer collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    pub total_customers: usize,
    pub risk_counts: RiskCounts,
    pub total_aml_alerts: usize,
    pub total_balance: f64,
}

/// Compute portfolio statistics. Defined for the empty collection: every
/// count and sum is zero.
pub fn portfolio_stats(customers: &[Customer]) -> PortfolioStats {
    let mut risk_counts = RiskCounts::default();
    let mut total_aml_alerts = 0;
    let mut total_balance = 0.0;

    for customer in customers {
        match customer.risk_rating {
            RiskRating::High => risk_counts.high += 1,
            RiskRating::Medium => risk_counts.medium += 1,
            RiskRating::Low => risk_counts.low += 1,
        }
        total_aml_alerts += customer.aml_flags.len();
        total_balance += customer.account_balance;
    }

    PortfolioStats {
        total_customers: customers.len(),
        risk_counts,
        total_aml_alerts,
        total_balance,
    }
}
