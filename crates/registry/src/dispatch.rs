//! Callable storage: per-scope generic tables plus per-variant override rows.
//!
//! Resolution is override-then-fallback: an object-scope lookup with a bound
//! variant consults that variant's row first and falls back to the generic
//! table when the slot is absent. Non-object scopes have no override rows.

use aperture_primitives::{Scope, SymbolId, VariantId};

#[derive(Debug)]
pub(crate) struct DispatchTables<F> {
	generic: [Box<[Option<F>]>; Scope::COUNT],
	/// One row per declared variant, each indexed by object-scope id.
	overrides: Vec<Box<[Option<F>]>>,
}

impl<F: Clone> DispatchTables<F> {
	pub(crate) fn new(generic: [Box<[Option<F>]>; Scope::COUNT], overrides: Vec<Box<[Option<F>]>>) -> Self {
		Self { generic, overrides }
	}

	/// Resolves an id to a callable.
	///
	/// The variant is only consulted at object scope. Variant ids are minted
	/// by the builder, so every declared variant has a row; an out-of-range
	/// id can only come from a fabricated value.
	pub(crate) fn resolve(&self, scope: Scope, id: SymbolId, variant: Option<VariantId>) -> Option<F> {
		if scope == Scope::Object
			&& let Some(v) = variant
		{
			debug_assert!(v.index() < self.overrides.len(), "{v} was never declared");
			if let Some(found) = self
				.overrides
				.get(v.index())
				.and_then(|row| row.get(id.as_usize()))
				.and_then(Option::clone)
			{
				return Some(found);
			}
		}
		self.generic[scope.as_usize()]
			.get(id.as_usize())
			.and_then(Option::clone)
	}

	/// Number of declared variant rows.
	#[inline]
	pub(crate) fn variant_rows(&self) -> usize {
		self.overrides.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tables() -> DispatchTables<&'static str> {
		let generic = [
			vec![Some("root:open")].into_boxed_slice(),
			vec![].into_boxed_slice(),
			// object scope: id 0 has a generic entry, id 1 has none
			vec![Some("obj:generic"), None].into_boxed_slice(),
		];
		let overrides = vec![
			// variant 0 overrides id 0 only
			vec![Some("obj:v0"), None].into_boxed_slice(),
			// variant 1 overrides nothing
			vec![None, None].into_boxed_slice(),
		];
		DispatchTables::new(generic, overrides)
	}

	#[test]
	fn override_wins() {
		let t = tables();
		assert_eq!(t.resolve(Scope::Object, SymbolId(0), Some(VariantId(0))), Some("obj:v0"));
	}

	#[test]
	fn absent_override_falls_back_to_generic() {
		let t = tables();
		assert_eq!(
			t.resolve(Scope::Object, SymbolId(0), Some(VariantId(1))),
			Some("obj:generic")
		);
	}

	#[test]
	fn absent_everywhere_is_none() {
		let t = tables();
		assert_eq!(t.resolve(Scope::Object, SymbolId(1), Some(VariantId(0))), None);
		assert_eq!(t.resolve(Scope::Object, SymbolId(1), None), None);
	}

	#[test]
	fn no_variant_uses_generic() {
		let t = tables();
		assert_eq!(t.resolve(Scope::Object, SymbolId(0), None), Some("obj:generic"));
	}

	#[test]
	fn non_object_scopes_ignore_variant() {
		let t = tables();
		assert_eq!(t.resolve(Scope::Root, SymbolId(0), Some(VariantId(0))), Some("root:open"));
		assert_eq!(t.resolve(Scope::SubResource, SymbolId(0), None), None);
	}

	#[test]
	fn unknown_id_is_none() {
		let t = tables();
		assert_eq!(t.resolve(Scope::Root, SymbolId(40), None), None);
	}
}
