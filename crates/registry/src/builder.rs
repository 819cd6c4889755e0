//! Single-phase resolver construction.
//!
//! Registration order fixes symbol ids (`0..n` per scope) and variant ids
//! (`0..k`). Duplicate names are rejected eagerly; rule and callable targets
//! are validated when [`ResolverBuilder::build`] runs, so a built
//! [`Resolver`] can no longer fail.

use aperture_primitives::{Scope, SymbolId, VariantId};
use rustc_hash::FxHashSet;

use crate::dispatch::DispatchTables;
use crate::error::BuildError;
use crate::gate::{CapabilityGate, CapabilityRule};
use crate::names::NameTable;
use crate::resolver::Resolver;

struct ScopeBuilder<F> {
	names: Vec<Box<str>>,
	seen: FxHashSet<Box<str>>,
	rules: Vec<(SymbolId, CapabilityRule)>,
	generic: Vec<(SymbolId, F)>,
}

impl<F> ScopeBuilder<F> {
	fn new() -> Self {
		Self {
			names: Vec::new(),
			seen: FxHashSet::default(),
			rules: Vec::new(),
			generic: Vec::new(),
		}
	}
}

impl<F: Clone> ScopeBuilder<F> {
	fn finish(self, scope: Scope) -> Result<(NameTable, CapabilityGate, Box<[Option<F>]>), BuildError> {
		let count = self.names.len();

		let mut rules = vec![CapabilityRule::never(); count];
		for (id, rule) in self.rules {
			let slot = rules
				.get_mut(id.as_usize())
				.ok_or(BuildError::UnknownSymbol { scope, id })?;
			*slot = rule;
		}

		let mut generic = vec![None; count];
		for (id, callable) in self.generic {
			let slot = generic
				.get_mut(id.as_usize())
				.ok_or(BuildError::UnknownSymbol { scope, id })?;
			*slot = Some(callable);
		}

		let table = NameTable::build(self.names);
		tracing::debug!(
			scope = %scope,
			entries = count,
			slots = table.slot_count(),
			max_probe = table.max_probe(),
			"built name table"
		);

		Ok((table, CapabilityGate::new(rules), generic.into_boxed_slice()))
	}
}

/// Collects names, rules, callables, and variants, then builds a
/// [`Resolver`].
///
/// ```rust,ignore
/// let mut builder = ResolverBuilder::new();
/// let g9 = builder.declare_variant("gen9");
/// let open = builder.register(Scope::Object, "OpenSession")?;
/// builder.set_generic(Scope::Object, open, open_generic);
/// builder.set_override(g9, open, open_gen9);
/// let resolver = builder.build()?;
/// ```
pub struct ResolverBuilder<F> {
	scopes: [ScopeBuilder<F>; Scope::COUNT],
	variants: Vec<Box<str>>,
	overrides: Vec<(VariantId, SymbolId, F)>,
}

impl<F: Clone> ResolverBuilder<F> {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self {
			scopes: std::array::from_fn(|_| ScopeBuilder::new()),
			variants: Vec::new(),
			overrides: Vec::new(),
		}
	}

	/// Declares an implementation variant, returning its id.
	///
	/// Declaring the same name twice returns the existing id. The declared
	/// set is fixed once [`build`](Self::build) runs.
	///
	/// # Panics
	///
	/// Panics if the variant id space (u16) is exhausted.
	pub fn declare_variant(&mut self, name: &str) -> VariantId {
		if let Some(index) = self.variants.iter().position(|v| **v == *name) {
			return VariantId(index as u16);
		}
		assert!(self.variants.len() < usize::from(u16::MAX), "variant space exhausted");
		let id = VariantId(self.variants.len() as u16);
		self.variants.push(name.into());
		id
	}

	/// Registers a name in a scope, assigning the next dense id.
	pub fn register(&mut self, scope: Scope, name: &str) -> Result<SymbolId, BuildError> {
		let sb = &mut self.scopes[scope.as_usize()];
		if sb.seen.contains(name) {
			return Err(BuildError::DuplicateName {
				scope,
				name: name.to_owned(),
			});
		}
		let id = SymbolId(sb.names.len() as u32);
		sb.seen.insert(name.into());
		sb.names.push(name.into());
		Ok(id)
	}

	/// Attaches an enablement rule to a registered id.
	///
	/// Ids without a rule are never enabled. The target is validated by
	/// [`build`](Self::build).
	pub fn rule(&mut self, scope: Scope, id: SymbolId, rule: CapabilityRule) {
		self.scopes[scope.as_usize()].rules.push((id, rule));
	}

	/// Sets the generic-table callable for an id.
	pub fn set_generic(&mut self, scope: Scope, id: SymbolId, callable: F) {
		self.scopes[scope.as_usize()].generic.push((id, callable));
	}

	/// Sets a variant override for an object-scope id.
	///
	/// Overrides exist only at object scope; the variant and id targets are
	/// validated by [`build`](Self::build).
	pub fn set_override(&mut self, variant: VariantId, id: SymbolId, callable: F) {
		self.overrides.push((variant, id, callable));
	}

	/// Builds the immutable resolver.
	pub fn build(self) -> Result<Resolver<F>, BuildError> {
		let variant_count = self.variants.len();
		let [root, sub, object] = self.scopes;
		let (root_names, root_gate, root_generic) = root.finish(Scope::Root)?;
		let (sub_names, sub_gate, sub_generic) = sub.finish(Scope::SubResource)?;
		let (object_names, object_gate, object_generic) = object.finish(Scope::Object)?;

		let object_count = object_names.len();
		let mut rows: Vec<Box<[Option<F>]>> = Vec::with_capacity(variant_count);
		for _ in 0..variant_count {
			rows.push(vec![None; object_count].into_boxed_slice());
		}
		for (variant, id, callable) in self.overrides {
			let row = rows.get_mut(variant.index()).ok_or(BuildError::UnknownVariant {
				index: variant.index(),
			})?;
			let slot = row.get_mut(id.as_usize()).ok_or(BuildError::UnknownSymbol {
				scope: Scope::Object,
				id,
			})?;
			*slot = Some(callable);
		}

		tracing::debug!(variants = variant_count, "resolver built");

		Ok(Resolver::from_parts(
			[root_names, sub_names, object_names],
			[root_gate, sub_gate, object_gate],
			DispatchTables::new([root_generic, sub_generic, object_generic], rows),
			self.variants.into_boxed_slice(),
		))
	}
}

impl<F: Clone> Default for ResolverBuilder<F> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_dense_per_scope() {
		let mut b: ResolverBuilder<fn()> = ResolverBuilder::new();
		assert_eq!(b.register(Scope::Root, "a").unwrap(), SymbolId(0));
		assert_eq!(b.register(Scope::Root, "b").unwrap(), SymbolId(1));
		assert_eq!(b.register(Scope::Object, "a").unwrap(), SymbolId(0));
	}

	#[test]
	fn duplicate_name_is_rejected() {
		let mut b: ResolverBuilder<fn()> = ResolverBuilder::new();
		b.register(Scope::Object, "OpenSession").unwrap();
		let err = b.register(Scope::Object, "OpenSession").unwrap_err();
		assert_eq!(
			err,
			BuildError::DuplicateName {
				scope: Scope::Object,
				name: "OpenSession".into(),
			}
		);
		// Same name in another scope is fine.
		b.register(Scope::Root, "OpenSession").unwrap();
	}

	#[test]
	fn rule_target_is_validated() {
		let mut b: ResolverBuilder<fn()> = ResolverBuilder::new();
		b.register(Scope::Root, "a").unwrap();
		b.rule(Scope::Root, SymbolId(9), CapabilityRule::never());
		let err = b.build().unwrap_err();
		assert_eq!(
			err,
			BuildError::UnknownSymbol {
				scope: Scope::Root,
				id: SymbolId(9),
			}
		);
	}

	#[test]
	fn override_variant_is_validated() {
		let mut b: ResolverBuilder<&'static str> = ResolverBuilder::new();
		let id = b.register(Scope::Object, "a").unwrap();
		b.set_override(VariantId(3), id, "f");
		let err = b.build().unwrap_err();
		assert_eq!(err, BuildError::UnknownVariant { index: 3 });
	}

	#[test]
	fn override_symbol_is_validated() {
		let mut b: ResolverBuilder<&'static str> = ResolverBuilder::new();
		let v = b.declare_variant("v0");
		b.register(Scope::Object, "a").unwrap();
		b.set_override(v, SymbolId(5), "f");
		let err = b.build().unwrap_err();
		assert_eq!(
			err,
			BuildError::UnknownSymbol {
				scope: Scope::Object,
				id: SymbolId(5),
			}
		);
	}

	#[test]
	fn declare_variant_is_idempotent() {
		let mut b: ResolverBuilder<fn()> = ResolverBuilder::new();
		let a = b.declare_variant("gen9");
		let c = b.declare_variant("gen11");
		assert_eq!(b.declare_variant("gen9"), a);
		assert_eq!(c, VariantId(1));
	}

	#[test]
	fn empty_builder_builds() {
		let r = ResolverBuilder::<fn()>::new().build().unwrap();
		assert_eq!(r.symbol_count(Scope::Root), 0);
		assert_eq!(r.variant_count(), 0);
		assert_eq!(r.get_index(Scope::Root, "anything"), None);
	}
}
