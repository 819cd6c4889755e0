//! Entry-point name resolution and tiered dispatch.
//!
//! This crate maps API symbol names to stable per-scope integer ids, answers
//! whether an id is enabled under a negotiated version/capability context,
//! and resolves an id to a concrete callable, preferring a hardware-variant
//! override and falling back to the scope's generic table.
//!
//! # Components
//!
//! - [`NameTable`]: immutable name → id index (open addressing, custom hash)
//! - [`CapabilityGate`]: data-driven enablement rules per id
//! - [`Resolver`]: the public façade over names, gates, and dispatch tables
//! - [`ResolverBuilder`]: single-phase construction; the built [`Resolver`]
//!   is immutable and lock-free for readers
//!
//! # Lifecycle
//!
//! Tables are built once during initialization and never mutated. Embedders
//! wanting a process-wide resolver wrap it in `std::sync::OnceLock`:
//!
//! ```rust,ignore
//! static RESOLVER: OnceLock<Resolver<Entry>> = OnceLock::new();
//!
//! fn resolver() -> &'static Resolver<Entry> {
//!     RESOLVER.get_or_init(build_resolver)
//! }
//! ```
//!
//! Missing names are routine: every query surface returns `Option`. The one
//! non-routine failure is a probe reporting a variant this build never
//! declared — that surfaces as [`ResolveError::UnknownVariant`] from the
//! binding APIs and should abort initialization.

pub mod builder;
mod dispatch;
mod error;
pub mod gate;
pub mod names;
mod resolver;

pub use aperture_primitives::{CapabilityId, CapabilitySet, Scope, SymbolId, VariantId, Version};
pub use builder::ResolverBuilder;
pub use error::{BuildError, ResolveError};
pub use gate::{CapabilityClause, CapabilityGate, CapabilityRule, Context};
pub use names::{NameEntry, NameTable, hash_name};
pub use resolver::{Resolver, VariantBinding};
