//! The review desk session: the single owner of analyst-facing state.
//!
//! The session holds the active customer collection, the free-text search
//! query, and the current selection as explicit values. There is exactly
//! one writer: callers mutate the session through its methods, and every
//! mutation either fully applies or leaves the session untouched.

use crate::{
    customer::Customer,
    dataset,
    error::{DeskResult, ValidationError},
    query::{self, PortfolioStats},
    types::CustomerId,
};
use uuid::Uuid;

pub struct DeskSession {
    customers: Vec<Customer>,
    query: String,
    selected: Option<CustomerId>,
}

impl DeskSession {
    /// Start a session on an already-validated collection.
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            query: String::new(),
            selected: None,
        }
    }

    /// Start a session on the built-in portfolio.
    pub fn with_default_portfolio() -> DeskResult<Self> {
        Ok(Self::new(dataset::default_portfolio()?))
    }

    /// Apply an upload attempt.
    ///
    /// The text is validated in full before anything changes; on success
    /// the collection is swapped wholesale and the search query and
    /// selection are cleared. On failure the session is left exactly as
    /// it was and the error is returned to the caller to surface.
    ///
    /// Attempts apply in completion order: when two uploads overlap at
    /// the caller, whichever apply lands last wins.
    pub fn replace_portfolio(&mut self, text: &str) -> Result<usize, ValidationError> {
        let upload_id = Uuid::new_v4();
        match dataset::parse_portfolio(text) {
            Ok(customers) => {
                let count = customers.len();
                self.customers = customers;
                self.query.clear();
                self.selected = None;
                log::info!("upload {upload_id}: portfolio replaced, {count} customers active");
                Ok(count)
            }
            Err(err) => {
                log::warn!("upload {upload_id}: rejected ({err}), keeping current portfolio");
                Err(err)
            }
        }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Select a customer by id, or clear the selection with `None`.
    pub fn select(&mut self, customer_id: Option<&str>) {
        self.selected = customer_id.map(str::to_owned);
    }

    /// The selected customer, resolved against the current collection.
    /// An id that no longer exists resolves to `None` rather than
    /// dangling.
    pub fn selected(&self) -> Option<&Customer> {
        let id = self.selected.as_deref()?;
        self.customers.iter().find(|c| c.id == id)
    }

    /// The full active collection, unfiltered.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The filtered view for the active query.
    pub fn visible(&self) -> Vec<&Customer> {
        query::filter_customers(&self.customers, &self.query)
    }

    /// Aggregates over the full collection, regardless of the active
    /// query.
    pub fn stats(&self) -> PortfolioStats {
        query::portfolio_stats(&self.customers)
    }
}
