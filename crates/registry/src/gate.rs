//! Data-driven enablement rules.
//!
//! Each symbol carries a rule: an OR-combination of version and capability
//! clauses. One interpreter evaluates every rule, so enablement is a table
//! property rather than generated code, and monotonicity can be checked by
//! iterating the rule table.

use aperture_primitives::{CapabilityId, CapabilitySet, SymbolId, Version};

/// One way an entry point can become enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityClause {
	/// Enabled once the negotiated core version reaches this threshold.
	CoreVersion(Version),
	/// Enabled while this root-scope capability is negotiated on.
	RootCapability(CapabilityId),
	/// Enabled while this object-scope capability is negotiated on.
	ObjectCapability(CapabilityId),
}

impl CapabilityClause {
	fn is_satisfied(self, ctx: &Context) -> bool {
		match self {
			CapabilityClause::CoreVersion(v) => v <= ctx.current_version,
			CapabilityClause::RootCapability(cap) => ctx.root_caps.contains(cap),
			// Unsatisfied, not an error, when evaluated before object-level
			// negotiation has happened.
			CapabilityClause::ObjectCapability(cap) => {
				ctx.object_caps.as_ref().is_some_and(|caps| caps.contains(cap))
			}
		}
	}
}

/// OR-combination of clauses gating one symbol.
///
/// A rule with no clauses never enables its symbol; such ids exist only as
/// placeholders.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRule {
	clauses: Vec<CapabilityClause>,
}

impl CapabilityRule {
	/// A rule that never enables its symbol.
	pub fn never() -> Self {
		Self::default()
	}

	/// Builds a rule from its OR-clauses.
	pub fn any_of(clauses: impl IntoIterator<Item = CapabilityClause>) -> Self {
		Self {
			clauses: clauses.into_iter().collect(),
		}
	}

	/// Returns the OR-clauses.
	#[inline]
	pub fn clauses(&self) -> &[CapabilityClause] {
		&self.clauses
	}

	/// Returns true if any clause is satisfied by the context.
	pub fn is_satisfied(&self, ctx: &Context) -> bool {
		self.clauses.iter().any(|clause| clause.is_satisfied(ctx))
	}
}

/// Negotiated runtime context rules are evaluated against.
///
/// `object_caps` is `None` while evaluating at root scope, before object
/// capabilities are negotiated; object-capability clauses are then simply
/// unsatisfied.
#[derive(Debug, Clone)]
pub struct Context {
	pub current_version: Version,
	pub root_caps: CapabilitySet,
	pub object_caps: Option<CapabilitySet>,
}

impl Context {
	/// A context with the given version and no negotiated capabilities.
	pub fn new(current_version: Version) -> Self {
		Self {
			current_version,
			root_caps: CapabilitySet::new(),
			object_caps: None,
		}
	}
}

/// Per-scope rule table indexed by [`SymbolId`].
///
/// Pure and immutable: safe to query from any number of threads.
#[derive(Debug)]
pub struct CapabilityGate {
	rules: Box<[CapabilityRule]>,
}

impl CapabilityGate {
	pub(crate) fn new(rules: Vec<CapabilityRule>) -> Self {
		Self {
			rules: rules.into_boxed_slice(),
		}
	}

	/// Returns true if the id exists and its rule is satisfied.
	///
	/// Unknown ids are never enabled.
	pub fn is_enabled(&self, id: SymbolId, ctx: &Context) -> bool {
		self.rules
			.get(id.as_usize())
			.is_some_and(|rule| rule.is_satisfied(ctx))
	}

	/// Returns the rule for an id.
	pub fn rule(&self, id: SymbolId) -> Option<&CapabilityRule> {
		self.rules.get(id.as_usize())
	}

	/// Number of rules (one per registered symbol).
	#[inline]
	pub fn len(&self) -> usize {
		self.rules.len()
	}

	/// Returns true if the gate holds no rules.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}
