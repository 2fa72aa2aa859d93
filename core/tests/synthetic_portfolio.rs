//! Synthetic portfolio generator properties: determinism and
//! compatibility with dataset validation.

use riskportal_core::customer::RiskRating;
use riskportal_core::dataset::parse_portfolio;
use riskportal_core::generator::PortfolioGenerator;

#[test]
fn same_seed_produces_identical_portfolios() {
    let a = PortfolioGenerator::generate(42, 25);
    let b = PortfolioGenerator::generate(42, 25);
    assert_eq!(a, b, "same seed and count must reproduce the portfolio");
}

#[test]
fn different_seeds_produce_different_portfolios() {
    let a = PortfolioGenerator::generate(1, 25);
    let b = PortfolioGenerator::generate(2, 25);
    assert_ne!(a, b);
}

#[test]
fn generated_portfolio_survives_upload_validation() {
    let customers = PortfolioGenerator::generate(42, 40);
    let text = serde_json::to_string(&customers).expect("portfolio serializes");

    let parsed = parse_portfolio(&text).expect("generated portfolios must validate");
    assert_eq!(parsed, customers, "ingestion must not alter the records");
}

#[test]
fn customer_ids_are_unique() {
    let customers = PortfolioGenerator::generate(7, 100);
    let mut ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), customers.len(), "ids must be unique in a collection");
}

#[test]
fn all_risk_tiers_appear_in_a_large_portfolio() {
    let customers = PortfolioGenerator::generate(42, 200);
    for rating in [RiskRating::High, RiskRating::Medium, RiskRating::Low] {
        assert!(
            customers.iter().any(|c| c.risk_rating == rating),
            "expected at least one {} customer in 200",
            rating.as_str()
        );
    }
}

#[test]
fn high_risk_customers_carry_flags() {
    let customers = PortfolioGenerator::generate(11, 120);
    for customer in customers.iter().filter(|c| c.risk_rating == RiskRating::High) {
        assert!(
            !customer.aml_flags.is_empty(),
            "high-risk customer {} should carry at least one flag",
            customer.id
        );
    }
}

#[test]
fn generated_nested_elements_parse_as_documented_shapes() {
    let customers = PortfolioGenerator::generate(3, 60);
    for customer in &customers {
        assert_eq!(
            customer.flag_details().len(),
            customer.aml_flags.len(),
            "every generated flag should match the documented shape"
        );
        assert_eq!(
            customer.factor_details().len(),
            customer.risk_factors.len(),
            "every generated factor should match the documented shape"
        );
    }
}
