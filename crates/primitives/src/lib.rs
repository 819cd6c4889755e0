//! Identifier and capability primitives shared across the aperture workspace.
//!
//! This crate provides the leaf value types the resolver is built from:
//! - [`Scope`]: the namespace level a symbol name is unique within
//! - [`SymbolId`]: stable small integer identifying a registered name
//! - [`VariantId`]: an alternate implementation set, selected per object
//! - [`CapabilityId`] / [`CapabilitySet`]: negotiated optional features
//! - [`Version`]: packed core version, ordered by promotion
//!
//! Everything here is plain data: `Copy` where possible, immutable, and safe
//! to share across threads.

mod capset;
mod ids;
mod scope;
mod version;

pub use capset::CapabilitySet;
pub use ids::{CapabilityId, SymbolId, VariantId};
pub use scope::Scope;
pub use version::Version;
