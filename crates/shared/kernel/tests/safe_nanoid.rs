use ghub_kernel::{SAFE_ALPHABET, safe_nanoid};
use std::collections::HashSet;

#[test]
fn ids_stay_within_the_unambiguous_alphabet() {
    for _ in 0..64 {
        let id = safe_nanoid!();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "stray character in {id}");
    }
}

#[test]
fn explicit_lengths_are_honored() {
    assert_eq!(safe_nanoid!(8).len(), 8);
    assert_eq!(safe_nanoid!(32).len(), 32);
}

#[test]
fn ids_do_not_collide_casually() {
    let ids: HashSet<String> = (0..256).map(|_| safe_nanoid!()).collect();
    assert_eq!(ids.len(), 256);
}
