//! Public resolution façade.

use aperture_primitives::{Scope, SymbolId, VariantId};

use crate::dispatch::DispatchTables;
use crate::error::ResolveError;
use crate::gate::{CapabilityGate, Context};
use crate::names::NameTable;

/// Variant identity bound to an object when it is constructed.
///
/// Bindings are minted only by [`Resolver::bind_variant`] and
/// [`Resolver::bind_by_name`], so holding one proves the variant was
/// declared. A binding is written once at object construction and never
/// re-bound; call sites stay variant-oblivious by storing the binding in
/// the object and passing it to [`Resolver::resolve_bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantBinding {
	variant: VariantId,
}

impl VariantBinding {
	/// Returns the bound variant.
	#[inline]
	pub fn variant(self) -> VariantId {
		self.variant
	}
}

/// Immutable lookup surface over names, gates, and dispatch tables.
///
/// Built once by [`ResolverBuilder`]; every query is lock-free and safe to
/// call from any number of threads. Missing names and unimplemented slots
/// are routine `None` results — the only hard failure is binding a variant
/// this build never declared.
///
/// [`ResolverBuilder`]: crate::ResolverBuilder
#[derive(Debug)]
pub struct Resolver<F> {
	names: [NameTable; Scope::COUNT],
	gates: [CapabilityGate; Scope::COUNT],
	tables: DispatchTables<F>,
	variants: Box<[Box<str>]>,
}

impl<F: Clone> Resolver<F> {
	pub(crate) fn from_parts(
		names: [NameTable; Scope::COUNT],
		gates: [CapabilityGate; Scope::COUNT],
		tables: DispatchTables<F>,
		variants: Box<[Box<str>]>,
	) -> Self {
		Self {
			names,
			gates,
			tables,
			variants,
		}
	}

	/// Resolves a name to its id within a scope.
	pub fn get_index(&self, scope: Scope, name: &str) -> Option<SymbolId> {
		self.names[scope.as_usize()].lookup(name)
	}

	/// Returns the name registered under an id within a scope.
	pub fn get_name(&self, scope: Scope, id: SymbolId) -> Option<&str> {
		self.names[scope.as_usize()].reverse(id)
	}

	/// Returns true if the id exists in the scope and its rule is satisfied.
	///
	/// Enablement is advisory: [`resolve`](Self::resolve) and
	/// [`lookup`](Self::lookup) do not consult it. Callers decide whether a
	/// disabled entry point should be handed out.
	pub fn is_enabled(&self, scope: Scope, id: SymbolId, ctx: &Context) -> bool {
		self.gates[scope.as_usize()].is_enabled(id, ctx)
	}

	/// Resolves an id to a callable, override first, generic fallback.
	///
	/// The variant is only consulted at object scope.
	pub fn resolve(&self, scope: Scope, id: SymbolId, variant: Option<VariantId>) -> Option<F> {
		self.tables.resolve(scope, id, variant)
	}

	/// Resolves an object-scope id through an object's bound variant.
	pub fn resolve_bound(&self, id: SymbolId, binding: VariantBinding) -> Option<F> {
		self.tables.resolve(Scope::Object, id, Some(binding.variant))
	}

	/// Name-to-callable convenience: existence only, no enablement check.
	pub fn lookup(&self, scope: Scope, name: &str, variant: Option<VariantId>) -> Option<F> {
		let id = self.get_index(scope, name)?;
		self.resolve(scope, id, variant)
	}

	/// Resolves a declared variant by name.
	///
	/// An unknown name here means the deployed build does not match the
	/// runtime hardware set: fail initialization rather than falling back.
	pub fn variant(&self, name: &str) -> Result<VariantId, ResolveError> {
		match self.variants.iter().position(|v| **v == *name) {
			Some(index) => Ok(VariantId(index as u16)),
			None => Err(ResolveError::UnknownVariant {
				name: name.to_owned(),
				declared: self.variants.iter().map(|v| v.to_string()).collect(),
			}),
		}
	}

	/// Validates a variant id and mints a binding for it.
	pub fn bind_variant(&self, variant: VariantId) -> Result<VariantBinding, ResolveError> {
		if variant.index() < self.tables.variant_rows() {
			Ok(VariantBinding { variant })
		} else {
			Err(ResolveError::UndeclaredVariant {
				index: variant.index(),
				declared: self.tables.variant_rows(),
			})
		}
	}

	/// Resolves a variant name and mints a binding in one step.
	pub fn bind_by_name(&self, name: &str) -> Result<VariantBinding, ResolveError> {
		let variant = self.variant(name)?;
		self.bind_variant(variant)
	}

	/// Returns the declared name of a variant.
	pub fn variant_name(&self, variant: VariantId) -> Option<&str> {
		self.variants.get(variant.index()).map(|v| &**v)
	}

	/// Number of declared variants.
	#[inline]
	pub fn variant_count(&self) -> usize {
		self.variants.len()
	}

	/// Number of symbols registered in a scope.
	#[inline]
	pub fn symbol_count(&self, scope: Scope) -> usize {
		self.names[scope.as_usize()].len()
	}

	/// Iterates a scope's symbols in id order.
	pub fn symbols(&self, scope: Scope) -> impl Iterator<Item = (SymbolId, &str)> {
		self.names[scope.as_usize()].iter().map(|e| (e.id(), e.name()))
	}

	/// Returns the nearest registered name for diagnostics.
	pub fn suggest(&self, scope: Scope, name: &str) -> Option<&str> {
		self.names[scope.as_usize()].suggest(name)
	}

	/// Returns the underlying name table for a scope.
	pub fn name_table(&self, scope: Scope) -> &NameTable {
		&self.names[scope.as_usize()]
	}

	/// Returns the underlying rule table for a scope.
	pub fn gate(&self, scope: Scope) -> &CapabilityGate {
		&self.gates[scope.as_usize()]
	}
}
