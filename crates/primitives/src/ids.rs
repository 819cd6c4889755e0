/// Stable small integer identifying a registered name within a [`Scope`].
///
/// Ids are dense: the builder assigns `0..n` in registration order, so a
/// `SymbolId` doubles as an index into the per-scope dispatch tables.
///
/// [`Scope`]: crate::Scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolId(pub u32);

impl SymbolId {
	/// Sentinel for an empty dispatch slot. Never returned by lookups.
	pub const INVALID: SymbolId = SymbolId(u32::MAX);

	/// Returns true if this id is not the sentinel.
	#[inline]
	pub fn is_valid(self) -> bool {
		self != Self::INVALID
	}

	/// Returns the underlying u32 value.
	#[inline]
	pub const fn as_u32(self) -> u32 {
		self.0
	}

	/// Returns the id as a table index.
	#[inline]
	pub const fn as_usize(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for SymbolId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if *self == Self::INVALID {
			write!(f, "SymbolId(INVALID)")
		} else {
			write!(f, "SymbolId({})", self.0)
		}
	}
}

/// Identifies one implementation variant (e.g. a hardware generation).
///
/// The set of variants is declared while building the resolver and fixed
/// thereafter; values are minted by `declare_variant` and validated by the
/// binding APIs, never synthesized by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantId(pub u16);

impl VariantId {
	/// Returns the variant as an override-table row index.
	#[inline]
	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

impl std::fmt::Display for VariantId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "VariantId({})", self.0)
	}
}

/// Identifies one named optional capability.
///
/// Capability ids are assigned by the embedder's negotiation layer; the
/// resolver only ever tests membership in a [`CapabilitySet`].
///
/// [`CapabilitySet`]: crate::CapabilitySet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityId(pub u16);

impl std::fmt::Display for CapabilityId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "CapabilityId({})", self.0)
	}
}
