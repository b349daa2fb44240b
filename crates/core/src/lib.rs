//! Domain logic for Viking minting.
//!
//! Everything here is pure and synchronous apart from the [`store`] seam:
//! raw trait input is validated, resolved into named traits and condition
//! tiers, turned into an [`specification::AssetSpecification`], and
//! flattened into a [`metadata::VikingRecord`] for storage and broadcast.

pub mod buckets;
pub mod condition;
pub mod config;
pub mod error;
pub mod input;
pub mod metadata;
pub mod pagination;
pub mod score;
pub mod slot;
pub mod specification;
pub mod store;
pub mod trait_selector;
pub mod types;
