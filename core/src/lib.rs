//! riskportal-core: the customer risk review desk.
//!
//! The core owns three things:
//!   1. Dataset ingestion: parse and validate an uploaded JSON portfolio
//!      before it may replace the active collection (`dataset`).
//!   2. Portfolio queries: free-text filtering and aggregate statistics
//!      (`query`).
//!   3. The desk session: the single owner of collection, search query,
//!      and selection state (`desk`).
//!
//! Risk ratings, AML flags, and risk factors are supplied data, never
//! computed here. Rendering lives outside this crate; the desk-runner
//! binary in tools/ is the reference front end.

pub mod customer;
pub mod dataset;
pub mod desk;
pub mod error;
pub mod generator;
pub mod query;
pub mod rng;
pub mod types;
