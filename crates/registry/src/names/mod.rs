//! Name interning: exact-match string → id, and the dense inverse.
//!
//! Lookup runs over an open-addressing slot array sized to the next power of
//! two at or above 1.5× the entry count. Probing advances by a fixed odd
//! stride, so every probe sequence visits the whole table before repeating;
//! the lookup loop is bounded by the table size and treats exhaustion as
//! "not found".

use aperture_primitives::SymbolId;

#[cfg(test)]
mod tests;

/// Multiplier for the byte-fold string hash.
pub(crate) const PRIME_FACTOR: u32 = 5024183;

/// Probe stride. Odd, so coprime with every power-of-two table size.
pub(crate) const PRIME_STEP: u32 = 19;

const EMPTY: u32 = u32::MAX;

/// Hashes a name by folding its bytes: `h = h * PRIME_FACTOR + byte`.
///
/// Pure function of the input bytes; no case folding, no length cap.
pub fn hash_name(name: &str) -> u32 {
	let mut h: u32 = 0;
	for &b in name.as_bytes() {
		h = h.wrapping_mul(PRIME_FACTOR).wrapping_add(u32::from(b));
	}
	h
}

/// One committed name with its precomputed hash.
#[derive(Debug)]
pub struct NameEntry {
	name: Box<str>,
	hash: u32,
	id: SymbolId,
}

impl NameEntry {
	/// Returns the registered name.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the precomputed hash of the name.
	#[inline]
	pub fn hash(&self) -> u32 {
		self.hash
	}

	/// Returns the id assigned to this name.
	#[inline]
	pub fn id(&self) -> SymbolId {
		self.id
	}
}

/// Immutable name → id index for one scope.
///
/// Ids are dense (`0..n` in registration order), so the committed entry list
/// doubles as the id → name array for [`reverse`](Self::reverse).
#[derive(Debug)]
pub struct NameTable {
	entries: Vec<NameEntry>,
	slots: Box<[u32]>,
	mask: u32,
	max_probe: u32,
}

impl NameTable {
	/// Builds the index from the final name list.
	///
	/// Callers guarantee pairwise-distinct names; the builder enforces this
	/// before handing the list over.
	pub(crate) fn build(names: Vec<Box<str>>) -> Self {
		let entries: Vec<NameEntry> = names
			.into_iter()
			.enumerate()
			.map(|(i, name)| {
				let hash = hash_name(&name);
				NameEntry {
					name,
					hash,
					id: SymbolId(i as u32),
				}
			})
			.collect();

		let slot_count = (entries.len() * 3).div_ceil(2).max(1).next_power_of_two();
		let mask = (slot_count - 1) as u32;
		let mut slots = vec![EMPTY; slot_count].into_boxed_slice();
		let mut max_probe = 0u32;

		for (i, entry) in entries.iter().enumerate() {
			let mut idx = entry.hash & mask;
			let mut probes = 1u32;
			while slots[idx as usize] != EMPTY {
				idx = idx.wrapping_add(PRIME_STEP) & mask;
				probes += 1;
			}
			slots[idx as usize] = i as u32;
			max_probe = max_probe.max(probes);
		}

		Self {
			entries,
			slots,
			mask,
			max_probe,
		}
	}

	/// Looks up a name, returning its id.
	///
	/// An unknown name is a routine outcome, not an error; callers use it
	/// for capability probing.
	pub fn lookup(&self, name: &str) -> Option<SymbolId> {
		let h = hash_name(name);
		let mut idx = h & self.mask;
		for _ in 0..self.slots.len() {
			let slot = self.slots[idx as usize];
			if slot == EMPTY {
				return None;
			}
			let entry = &self.entries[slot as usize];
			if entry.hash == h && *entry.name == *name {
				return Some(entry.id);
			}
			idx = idx.wrapping_add(PRIME_STEP) & self.mask;
		}
		None
	}

	/// Returns the name registered under an id.
	#[inline]
	pub fn reverse(&self, id: SymbolId) -> Option<&str> {
		self.entries.get(id.as_usize()).map(|e| &*e.name)
	}

	/// Returns the nearest registered name within edit distance 3.
	///
	/// Diagnostic helper for "did you mean" messages; [`lookup`](Self::lookup)
	/// never consults it.
	pub fn suggest(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.map(NameEntry::name)
			.min_by_key(|k| strsim::levenshtein(name, k))
			.filter(|k| strsim::levenshtein(name, k) <= 3)
	}

	/// Number of registered names.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no names are registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates the committed entries in id order.
	pub fn iter(&self) -> impl Iterator<Item = &NameEntry> {
		self.entries.iter()
	}

	/// Size of the probe array.
	#[inline]
	pub fn slot_count(&self) -> usize {
		self.slots.len()
	}

	/// Longest placement probe sequence seen while building.
	#[inline]
	pub fn max_probe(&self) -> u32 {
		self.max_probe
	}
}
