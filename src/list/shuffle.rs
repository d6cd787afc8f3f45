// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Fisher-Yates shuffle over a [`Sequence`].
//!
//! The list has no random access, so each swap walks from the head to both
//! positions: O(n) per swap, O(n^2) per shuffle. Values move between nodes;
//! nodes keep their place in the chain.
//!
//! The random source is passed in, so a seeded `StdRng` gives a
//! reproducible permutation.

use rand::Rng;

use super::Sequence;

/// Randomly permute the values of `seq` in place.
pub fn shuffle<T, R: Rng + ?Sized>(seq: &mut Sequence<T>, rng: &mut R) {
    let len = seq.len();
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        if i == j {
            continue;
        }
        let a = seq.walk(i);
        let b = seq.walk(j);
        seq.swap_values(a, b);
        tracing::trace!(i, j, "swapped positions");
    }
}
