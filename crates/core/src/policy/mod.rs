//! Contribution policy - caller-side bounds checked before a calculation runs.

mod policy_model;
mod policy_validator;

pub use policy_model::ContributionPolicy;
