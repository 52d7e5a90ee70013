//! Law checks and scenarios for the `mappable` records.
pub mod arb;
pub mod laws;

#[cfg(test)]
mod scenarios;
