//! Example: building a frequency list on top of DawgDict.
//!
//! This shows how to wrap the raw state-walking interface in a small high-level
//! API. The `FrequencyList` struct wraps a compiled dictionary and provides word
//! lookup, prefix checking, completion and iteration.
//!
//! Run with: cargo run --example wordlist

use worddict::dawg::wordlist::build_dict_from_reader;
use worddict::DawgDict;

const WORDS: &str = "\
# word<TAB>frequency
BAKE\t120
BAKED\t45
BAKER\t30
CAKE\t200
CAKED\t3
FAKE\t80
LAKE\t95
";

/// A convenient wrapper around a dictionary for frequency lookups.
struct FrequencyList {
    dict: DawgDict<u8>,
}

impl FrequencyList {
    fn new(dict: DawgDict<u8>) -> Self {
        FrequencyList { dict }
    }

    /// Returns the frequency of the word, if it is in the list.
    fn frequency(&self, word: &str) -> Option<i32> {
        self.dict.get(word)
    }

    /// Returns true if any word in the list starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        self.dict.has_prefix(prefix)
    }

    /// Returns every word starting with `prefix`, most frequent first.
    fn complete(&self, prefix: &str) -> Vec<(String, i32)> {
        let mut words: Vec<_> = self
            .dict
            .entries_with_prefix(prefix)
            .map(|(word, freq)| (String::from_utf8_lossy(&word).into_owned(), freq))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1));
        words
    }

    /// Returns all words in the list with their frequencies.
    fn all_words(&self) -> Vec<(String, i32)> {
        self.dict
            .entries()
            .map(|(word, freq)| (String::from_utf8_lossy(&word).into_owned(), freq))
            .collect()
    }
}

fn main() {
    let dict = match build_dict_from_reader(WORDS.as_bytes()) {
        Ok(dict) => dict,
        Err(err) => {
            eprintln!("failed to build the word list: {err}");
            return;
        }
    };
    println!(
        "{} words, {} states, {} transitions, {} cells",
        dict.len(),
        dict.states_count(),
        dict.transitions_count(),
        dict.size()
    );
    let list = FrequencyList::new(dict);

    // Word lookup
    println!("\nWord lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        match list.frequency(word) {
            Some(freq) => println!("  {word}: {freq}"),
            None => println!("  {word}: no"),
        }
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if list.has_prefix(prefix) { "yes" } else { "no" });
    }

    // Completion
    println!("\nCompletions for BAK: {:?}", list.complete("BAK"));

    // List all words
    println!("\nAll words: {:?}", list.all_words());
}
