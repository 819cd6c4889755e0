use proptest::prelude::*;

use super::*;

fn table(names: &[&str]) -> NameTable {
	NameTable::build(names.iter().map(|n| Box::from(*n)).collect())
}

#[test]
fn round_trip() {
	let names = [
		"OpenSession",
		"CloseSession",
		"SubmitWork",
		"QueryLimits",
		"WaitIdle",
	];
	let t = table(&names);
	assert_eq!(t.len(), names.len());
	for (i, name) in names.iter().enumerate() {
		let id = t.lookup(name).unwrap();
		assert_eq!(id, SymbolId(i as u32));
		assert_eq!(t.reverse(id), Some(*name));
	}
}

#[test]
fn unknown_name_is_none() {
	let t = table(&["OpenSession", "CloseSession"]);
	assert_eq!(t.lookup("DestroySession"), None);
	assert_eq!(t.lookup(""), None);
	assert_eq!(t.reverse(SymbolId(17)), None);
}

#[test]
fn empty_table() {
	let t = table(&[]);
	assert_eq!(t.slot_count(), 1);
	assert_eq!(t.lookup("anything"), None);
	assert!(t.is_empty());
}

#[test]
fn slot_count_is_next_power_of_two_over_load() {
	assert_eq!(table(&["a", "b"]).slot_count(), 4);
	assert_eq!(table(&["a", "b", "c"]).slot_count(), 8);
	assert_eq!(table(&["a"]).slot_count(), 2);
}

/// "sbnhqcjx" and "ijmgdrjj" fold to the same 32-bit hash. A full-hash
/// collision must still be rejected by the name comparison.
#[test]
fn full_hash_collision_differs_by_content() {
	assert_eq!(hash_name("sbnhqcjx"), hash_name("ijmgdrjj"));
	let t = table(&["sbnhqcjx"]);
	assert_eq!(t.lookup("sbnhqcjx"), Some(SymbolId(0)));
	assert_eq!(t.lookup("ijmgdrjj"), None);
}

#[test]
fn lookup_terminates_on_crowded_table() {
	// 6 entries in 16 slots; an absent name whose probe walk keeps hitting
	// occupied slots must still come back as not-found.
	let names = ["aa", "ab", "ac", "ad", "ae", "af"];
	let t = table(&names);
	assert_eq!(t.lookup("zz"), None);
	for name in names {
		assert!(t.lookup(name).is_some());
	}
}

#[test]
fn suggest_within_cutoff() {
	let t = table(&["OpenSession", "CloseSession", "SubmitWork"]);
	assert_eq!(t.suggest("OpenSesion"), Some("OpenSession"));
	assert_eq!(t.suggest("completely-unrelated"), None);
	assert_eq!(table(&[]).suggest("OpenSession"), None);
}

#[test]
fn max_probe_is_recorded() {
	let t = table(&["aa", "ab", "ac", "ad", "ae", "af"]);
	assert!(t.max_probe() >= 1);
	assert!(t.max_probe() <= t.slot_count() as u32);
}

proptest! {
	#[test]
	fn hash_is_deterministic(name in "[ -~]{0,64}") {
		let first = hash_name(&name);
		let second = hash_name(&name);
		prop_assert_eq!(first, second);
	}

	#[test]
	fn round_trip_arbitrary_names(names in proptest::collection::hash_set("[a-zA-Z0-9_]{1,24}", 0..64)) {
		let names: Vec<&str> = names.iter().map(String::as_str).collect();
		let t = table(&names);
		for (i, name) in names.iter().enumerate() {
			prop_assert_eq!(t.lookup(name), Some(SymbolId(i as u32)));
			prop_assert_eq!(t.reverse(SymbolId(i as u32)), Some(*name));
		}
	}
}
