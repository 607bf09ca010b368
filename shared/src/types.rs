//! Shared type aliases

/// Monetary amount in integer minor units (e.g. MWK tambala, USD cents).
///
/// Invariant: every price, line total and aggregate in the system is an
/// integer number of minor units of the owning organization's currency.
/// No floating point money anywhere.
pub type Money = i64;
