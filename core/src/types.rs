//! Shared primitive types used across the review desk.

/// A stable, unique identifier for a customer within a collection.
pub type CustomerId = String;
