//! `shuffle` command handler.

use mirage_core::{MediaType, seeded_shuffle};

/// One line per key: tour position, media type, key.
pub fn render_permutation(seed: u32, keys: &[String]) -> String {
    seeded_shuffle(keys, seed)
        .iter()
        .enumerate()
        .map(|(position, key)| {
            let kind = MediaType::from_key(key).as_str();
            format!("{position:>4}  {kind:<5}  {key}\n")
        })
        .collect()
}
