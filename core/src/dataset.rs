//! Dataset ingestion and validation.
//!
//! An uploaded portfolio replaces the active collection only if the whole
//! document passes the shape test; there is no partial apply. Parsing and
//! shape validation are distinct failure points with distinct errors.
//!
//! The shape test is one level deep: every record must carry the eleven
//! customer fields with the right types, but the elements of `amlFlags`
//! and `riskFactors` are only required to live in sequences. Do not deepen
//! this without changing the acceptance contract for existing datasets.

use crate::{
    customer::Customer,
    error::{DeskResult, ValidationError},
};
use serde_json::Value;
use std::path::Path;

/// The built-in portfolio active at startup, before any upload.
pub const DEFAULT_PORTFOLIO_JSON: &str = include_str!("../data/default_portfolio.json");

/// The six-customer collection every session starts from.
pub fn default_portfolio() -> Result<Vec<Customer>, ValidationError> {
    parse_portfolio(DEFAULT_PORTFOLIO_JSON)
}

/// Parse untrusted text as JSON, then validate it as a customer
/// collection.
pub fn parse_portfolio(text: &str) -> Result<Vec<Customer>, ValidationError> {
    let raw: Value = serde_json::from_str(text)?;
    validate(raw)
}

/// Decide whether a parsed JSON value is safe to treat as a customer
/// collection.
///
/// Succeeds only when `raw` is a non-empty array and every element passes
/// the customer shape test; the records come back recast with no coercion
/// and no defaulting. Unknown extra fields on a record are ignored. Which
/// record failed is not reported.
pub fn validate(raw: Value) -> Result<Vec<Customer>, ValidationError> {
    let records = match raw {
        Value::Array(records) => records,
        _ => return Err(ValidationError::NotAnArray),
    };

    if records.is_empty() {
        return Err(ValidationError::EmptyOrMalformed);
    }

    records
        .into_iter()
        .map(serde_json::from_value::<Customer>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ValidationError::EmptyOrMalformed)
}

/// Read a portfolio file as UTF-8 text and run it through
/// `parse_portfolio`.
pub fn load_portfolio(path: &Path) -> DeskResult<Vec<Customer>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_portfolio(&text)?)
}
