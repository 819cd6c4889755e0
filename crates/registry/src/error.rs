use aperture_primitives::{Scope, SymbolId};
use thiserror::Error;

/// Errors surfaced while building a resolver.
///
/// All of these indicate a programming or table-data mistake; a successful
/// `build()` guarantees none of them can occur at lookup time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
	/// A symbol name was registered twice within one scope.
	#[error("duplicate symbol name in {scope} scope: {name:?}")]
	DuplicateName { scope: Scope, name: String },
	/// A rule, generic entry, or override targets an unregistered id.
	#[error("no symbol {id} registered in {scope} scope")]
	UnknownSymbol { scope: Scope, id: SymbolId },
	/// An override targets a variant that was never declared.
	#[error("override targets undeclared variant index {index}")]
	UnknownVariant { index: usize },
}

/// Errors surfaced while binding a variant at startup.
///
/// Unlike a missing name, which is a routine `None`, these mean the deployed
/// build does not match the runtime hardware or configuration; callers
/// should fail initialization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
	/// The requested variant name was never declared in this build.
	#[error("unknown variant {name:?} (declared: {declared:?})")]
	UnknownVariant { name: String, declared: Vec<String> },
	/// A variant id outside the declared range.
	#[error("variant index {index} out of range ({declared} declared)")]
	UndeclaredVariant { index: usize, declared: usize },
}
