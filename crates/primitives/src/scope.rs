/// The namespace level within which a symbol name is unique.
///
/// Each scope owns its own name table, capability rules, and dispatch
/// tables. Ids are only meaningful within the scope that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scope {
	/// Process-wide entry points, available before any negotiation.
	Root,
	/// Entry points on enumerable sub-resources of the root.
	SubResource,
	/// Entry points on constructed objects, where variant dispatch applies.
	Object,
}

impl Scope {
	/// Number of scopes; sizes per-scope storage arrays.
	pub const COUNT: usize = 3;

	/// All scopes, in storage order.
	pub const ALL: [Scope; Scope::COUNT] = [Scope::Root, Scope::SubResource, Scope::Object];

	/// Returns the storage index for this scope.
	#[inline]
	pub const fn as_usize(self) -> usize {
		self as usize
	}

	/// Returns the lowercase label used in diagnostics.
	pub const fn label(self) -> &'static str {
		match self {
			Scope::Root => "root",
			Scope::SubResource => "sub-resource",
			Scope::Object => "object",
		}
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}
