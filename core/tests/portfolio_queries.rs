//! Query engine tests over the built-in portfolio.

use riskportal_core::dataset::default_portfolio;
use riskportal_core::query::{filter_customers, portfolio_stats};

#[test]
fn default_portfolio_loads_six_customers() {
    let customers = default_portfolio().expect("built-in portfolio should validate");
    assert_eq!(customers.len(), 6, "expected the six built-in customers");
}

#[test]
fn filter_matches_city_substring_case_insensitively() {
    let customers = default_portfolio().unwrap();
    let hits = filter_customers(&customers, "miami");
    assert_eq!(hits.len(), 1, "exactly one customer is in Miami");
    assert_eq!(hits[0].name, "Elena Rodriguez");
    assert_eq!(hits[0].city, "Miami, FL");
}

#[test]
fn filter_matches_name_case_insensitively() {
    let customers = default_portfolio().unwrap();
    let hits = filter_customers(&customers, "SARAH");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sarah Johnson");
}

#[test]
fn empty_query_matches_all_in_original_order() {
    let customers = default_portfolio().unwrap();
    let hits = filter_customers(&customers, "");
    let ids: Vec<&str> = hits.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn filter_is_stable() {
    // "on" hits Johnson, Thompson, and Wilson; the survivors must keep
    // their relative order from the source collection.
    let customers = default_portfolio().unwrap();
    let hits = filter_customers(&customers, "on");
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| customers.iter().position(|c| c.id == hit.id).unwrap())
        .collect();
    assert_eq!(hits.len(), 3, "expected three matches for 'on'");
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "filtered order should follow source order, got positions {positions:?}"
    );
}

#[test]
fn filter_with_no_match_is_empty() {
    let customers = default_portfolio().unwrap();
    assert!(filter_customers(&customers, "zzz-no-such-customer").is_empty());
}

#[test]
fn aggregate_matches_default_portfolio() {
    let customers = default_portfolio().unwrap();
    let stats = portfolio_stats(&customers);

    assert_eq!(stats.total_customers, 6);
    assert_eq!(stats.risk_counts.high, 2);
    assert_eq!(stats.risk_counts.medium, 2);
    assert_eq!(stats.risk_counts.low, 2);
    assert_eq!(stats.total_aml_alerts, 5, "0+1+2+0+1+2 flags");
    assert_eq!(stats.total_balance, 540_500.0);
}

#[test]
fn aggregate_is_defined_for_empty_collection() {
    let stats = portfolio_stats(&[]);
    assert_eq!(stats.total_customers, 0);
    assert_eq!(stats.risk_counts.high, 0);
    assert_eq!(stats.risk_counts.medium, 0);
    assert_eq!(stats.risk_counts.low, 0);
    assert_eq!(stats.total_aml_alerts, 0);
    assert_eq!(stats.total_balance, 0.0);
}
