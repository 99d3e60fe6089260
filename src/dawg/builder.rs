use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ffi::CStr;
use std::iter;

use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use super::char_trait::{DictChar, DictValue};
use super::dict::DawgDict;
use super::registry::StateRegistry;
use super::state::{State, StateId};

/// Trait for types that can be used as a key when building or querying a dictionary.
///
/// Implemented for common string and sequence types so that [`DawgBuilder::insert`]
/// and the lookups of [`DawgDict`] accept them directly without manual conversion.
pub trait IntoKey<C: DictChar> {
    /// Collects this key into a code-unit buffer.
    fn collect_key(self) -> SmallVec<[C; 32]>;
}

// String types → 8-bit code units

impl IntoKey<u8> for &str {
    fn collect_key(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

impl IntoKey<u8> for &&str {
    fn collect_key(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

impl IntoKey<u8> for String {
    fn collect_key(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_vec(self.into_bytes())
    }
}

impl IntoKey<u8> for &String {
    fn collect_key(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.as_bytes())
    }
}

/// Null-terminated form: the key is everything before the terminator.
impl IntoKey<u8> for &CStr {
    fn collect_key(self) -> SmallVec<[u8; 32]> {
        SmallVec::from_slice(self.to_bytes())
    }
}

// String types → wide code units

impl IntoKey<u16> for &str {
    fn collect_key(self) -> SmallVec<[u16; 32]> {
        self.encode_utf16().collect()
    }
}

impl IntoKey<u32> for &str {
    fn collect_key(self) -> SmallVec<[u32; 32]> {
        self.chars().map(u32::from).collect()
    }
}

// Generic sequence types → C

impl<C: DictChar> IntoKey<C> for &[C] {
    fn collect_key(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: DictChar> IntoKey<C> for Vec<C> {
    fn collect_key(self) -> SmallVec<[C; 32]> {
        SmallVec::from_vec(self)
    }
}

impl<C: DictChar> IntoKey<C> for &Vec<C> {
    fn collect_key(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: DictChar, const N: usize> IntoKey<C> for [C; N] {
    fn collect_key(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: DictChar, const N: usize> IntoKey<C> for &[C; N] {
    fn collect_key(self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

/// Errors that reject a key passed to [`DawgBuilder`].
///
/// A rejected insertion leaves the builder exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError<C: DictChar> {
    /// The key has no code units.
    #[error("key is empty")]
    EmptyKey,
    /// The key contains the terminator code unit.
    #[error("key contains a terminator at position {position}")]
    EmbeddedTerminator {
        /// Offset of the first terminator.
        position: usize,
    },
    /// A null-terminated key had no terminator.
    #[error("key is not terminated")]
    Unterminated,
    /// Values must be non-negative.
    #[error("value {0} is negative")]
    NegativeValue(i64),
    /// Keys were not provided in strictly ascending order.
    ///
    /// Contains the two keys that were out of order (previous key, current key).
    #[error("OrderError - {0:?} came before {1:?}")]
    Order(Vec<C>, Vec<C>),
}

/// Errors that abort [`DawgBuilder::finish`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The compiled layout has more cells than the state index type can address.
    #[error("layout of {cells} cells does not fit the state index type")]
    CapacityExceeded {
        /// Cells the layout would need.
        cells: usize,
    },
    /// A value cannot be represented in a cell.
    ///
    /// Only possible for a custom [`DictChar`] whose `Base` is narrower than its
    /// `Value`; the built-in widths store every non-negative value.
    #[error("value {0} cannot be stored in a cell")]
    ValueOutOfRange(i64),
}

struct OpenState<C: DictChar> {
    label: C::Unsigned,
    state: State<C>,
}

impl<C: DictChar> OpenState<C> {
    fn new(label: C::Unsigned) -> Self {
        OpenState {
            label,
            state: State::default(),
        }
    }
}

/// A builder for constructing word dictionaries incrementally.
///
/// Keys must be inserted in strictly ascending order of their unsigned code units.
/// Each key is stored followed by a terminator transition, and states that can no
/// longer change are frozen and deduplicated against a content-addressed table, so
/// the result is a minimal automaton.
///
/// # Examples
///
/// ```
/// use worddict::{DawgBuilder, DawgDict};
///
/// let mut builder = DawgBuilder::<u8>::new();
/// builder.insert("bugaga", 1).unwrap();
/// builder.insert("bugora", 4).unwrap();
/// assert!(builder.insert("bugagb", 2).is_err());
///
/// let mut dict = DawgDict::default();
/// builder.finish(&mut dict).unwrap();
/// assert_eq!(dict.find("bugora"), 4);
/// assert_eq!(dict.find("bugagb"), -1);
/// ```
pub struct DawgBuilder<C: DictChar> {
    path: Vec<OpenState<C>>,
    registry: StateRegistry<C>,
    keys: usize,
}

impl<C: DictChar> Default for DawgBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DictChar> DawgBuilder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder whose interning table can hold `states` canonical
    /// states without reallocating.
    pub fn with_capacity(states: usize) -> Self {
        DawgBuilder {
            path: vec![OpenState::new(C::Unsigned::default())],
            registry: StateRegistry::with_capacity(states),
            keys: 0,
        }
    }

    /// Number of keys accepted since the builder was created or cleared.
    pub fn len(&self) -> usize {
        self.keys
    }

    /// True if no key has been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Adds a key with its value.
    ///
    /// The key can be any type that implements [`IntoKey`], including `&str`,
    /// `String`, `&CStr`, `&[C]`, `Vec<C>`, or fixed-size arrays.
    ///
    /// # Errors
    ///
    /// Fails without touching the builder if the key is empty, contains a
    /// terminator, the value is negative, or the key is not strictly greater
    /// than the previously accepted key.
    pub fn insert(&mut self, key: impl IntoKey<C>, value: C::Value) -> Result<(), InsertError<C>> {
        let key = key.collect_key();
        self.insert_slice(&key, value)
    }

    /// Adds a null-terminated key: everything before the first terminator.
    ///
    /// # Errors
    ///
    /// [`InsertError::Unterminated`] if `key` has no terminator, otherwise as
    /// [`insert`](DawgBuilder::insert).
    pub fn insert_nul_terminated(
        &mut self,
        key: &[C],
        value: C::Value,
    ) -> Result<(), InsertError<C>> {
        let end = key
            .iter()
            .position(|ch| ch.is_terminator())
            .ok_or(InsertError::Unterminated)
            .inspect_err(|err| trace!("rejected key {key:?}: {err}"))?;
        self.insert_slice(&key[..end], value)
    }

    /// Adds every entry of an ordered map.
    ///
    /// The whole map is validated first, so either all entries are inserted or
    /// none is. Entries are ordered by unsigned code units before insertion, so
    /// signed keys whose map order differs are accepted too.
    pub fn insert_map<K, V>(&mut self, entries: &BTreeMap<K, V>) -> Result<(), InsertError<C>>
    where
        for<'k> &'k K: IntoKey<C>,
        V: Copy + Into<C::Value>,
    {
        let mut batch: Vec<_> = entries
            .iter()
            .map(|(key, &value)| (key.collect_key(), value.into()))
            .collect();
        batch.sort_by(|(a, _), (b, _)| compare_keys(a.as_slice(), b.as_slice()));
        self.insert_batch(batch)
    }

    /// Adds entries given in any order by sorting them first.
    ///
    /// Like [`insert_map`](DawgBuilder::insert_map) the call is atomic; a key
    /// that appears twice is rejected as out of order.
    pub fn insert_unsorted<K, I>(&mut self, entries: I) -> Result<(), InsertError<C>>
    where
        K: IntoKey<C>,
        I: IntoIterator<Item = (K, C::Value)>,
    {
        let mut batch: Vec<_> = entries
            .into_iter()
            .map(|(key, value)| (key.collect_key(), value))
            .collect();
        batch.sort_by(|(a, _), (b, _)| compare_keys(a.as_slice(), b.as_slice()));
        self.insert_batch(batch)
    }

    fn insert_batch(
        &mut self,
        batch: Vec<(SmallVec<[C; 32]>, C::Value)>,
    ) -> Result<(), InsertError<C>> {
        let mut previous: Option<&[C]> = None;
        for (key, value) in &batch {
            validate(key, *value)?;
            match previous {
                None => {
                    self.prefix_length(key)?;
                }
                Some(prev) if compare_keys(prev, key.as_slice()) != Ordering::Less => {
                    return Err(InsertError::Order(prev.to_vec(), key.to_vec()));
                }
                Some(_) => {}
            }
            previous = Some(key.as_slice());
        }
        for (key, value) in &batch {
            self.insert_slice(key, *value)?;
        }
        Ok(())
    }

    fn insert_slice(&mut self, key: &[C], value: C::Value) -> Result<(), InsertError<C>> {
        let prefix_length = validate(key, value)
            .and_then(|()| self.prefix_length(key))
            .inspect_err(|err| trace!("rejected key {key:?}: {err}"))?;
        self.canonicalize_suffix(prefix_length);
        self.path.extend(
            key[prefix_length..]
                .iter()
                .map(|ch| OpenState::new(ch.to_unsigned()))
                .chain(iter::once(OpenState::new(C::Unsigned::default()))),
        );
        self.path[key.len()].state.set_value(value);
        self.keys += 1;
        Ok(())
    }

    /// Length of the prefix `key` (with its terminator) shares with the open path.
    fn prefix_length(&self, key: &[C]) -> Result<usize, InsertError<C>> {
        let units = key
            .iter()
            .map(|ch| ch.to_unsigned())
            .chain(iter::once(C::Unsigned::default()));
        let mut prefix_len = 0;
        for ch in units {
            let Some(prev_state) = self.path.get(prefix_len + 1) else {
                return Ok(prefix_len);
            };
            match ch.cmp(&prev_state.label) {
                Ordering::Greater => return Ok(prefix_len),
                Ordering::Less => break,
                Ordering::Equal => prefix_len += 1,
            }
        }
        Err(InsertError::Order(self.previous_key(), key.to_vec()))
    }

    fn previous_key(&self) -> Vec<C> {
        // the open path ends with the previous key's terminator
        let end = self.path.len().saturating_sub(1).max(1);
        self.path[1..end]
            .iter()
            .map(|e| C::from_unsigned(e.label))
            .collect()
    }

    /// Freezes every open state deeper than `target_length`.
    fn canonicalize_suffix(&mut self, target_length: usize) {
        let target_length = target_length
            .checked_add(1)
            .expect("target_length overflow");
        while self.path.len() > target_length {
            let open = self.pop_open_state();
            let child = self.registry.intern(open.state);
            self.add_open_state_child(open.label, child);
        }
    }

    fn pop_open_state(&mut self) -> OpenState<C> {
        self.path
            .pop()
            .expect("Open path will always have at least one entry")
    }

    fn add_open_state_child(&mut self, label: C::Unsigned, child: StateId) {
        self.path
            .last_mut()
            .expect("Open path will always have at least one entry")
            .state
            .push(label, child)
    }

    /// Freezes the remaining open path and materializes the automaton into `dict`.
    ///
    /// The builder is cleared whatever the outcome; on failure `dict` is left
    /// untouched and the keys have to be inserted again.
    pub fn finish(&mut self, dict: &mut DawgDict<C>) -> Result<(), BuildError> {
        self.canonicalize_suffix(0);
        let root = self.pop_open_state().state;
        let root = self.registry.intern(root);
        let compiled = DawgDict::compile(&self.registry, root, self.keys);
        self.clear();

        let compiled = compiled.inspect_err(|err| debug!("build failed: {err}"))?;
        let stats = compiled.stats();
        debug!(
            "built dictionary: {} keys, {} states, {} transitions, {} merged states, {} cells",
            compiled.len(),
            stats.states,
            stats.transitions,
            stats.merged_states,
            stats.size
        );
        *dict = compiled;
        Ok(())
    }

    /// Finalizes the construction and returns the dictionary.
    pub fn build(mut self) -> Result<DawgDict<C>, BuildError> {
        let mut dict = DawgDict::default();
        self.finish(&mut dict)?;
        Ok(dict)
    }

    /// Discards every inserted key; the builder is then as good as new.
    pub fn clear(&mut self) {
        self.path.clear();
        self.path.push(OpenState::new(C::Unsigned::default()));
        self.registry.clear();
        self.keys = 0;
    }
}

fn validate<C: DictChar>(key: &[C], value: C::Value) -> Result<(), InsertError<C>> {
    if key.is_empty() {
        return Err(InsertError::EmptyKey);
    }
    if let Some(position) = key.iter().position(|ch| ch.is_terminator()) {
        return Err(InsertError::EmbeddedTerminator { position });
    }
    if DictValue::is_negative(value) {
        return Err(InsertError::NegativeValue(value.into()));
    }
    Ok(())
}

/// Orders keys by their unsigned code units.
pub(crate) fn compare_keys<C: DictChar>(a: &[C], b: &[C]) -> Ordering {
    a.iter()
        .map(|ch| ch.to_unsigned())
        .cmp(b.iter().map(|ch| ch.to_unsigned()))
}

#[cfg(test)]
mod test {
    use super::super::char_trait::DictBase;
    use super::*;

    /// 8-bit code units addressed by an 8-bit state index.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct Narrow(u8);

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    struct NarrowBase(u8);

    impl DictBase for NarrowBase {
        fn from_usize(n: usize) -> Option<Self> {
            u8::try_from(n).ok().map(NarrowBase)
        }

        fn to_usize(self) -> usize {
            usize::from(self.0)
        }
    }

    impl DictChar for Narrow {
        type Unsigned = u8;
        type Value = i32;
        type Base = NarrowBase;

        fn to_unsigned(self) -> u8 {
            self.0
        }

        fn from_unsigned(label: u8) -> Self {
            Narrow(label)
        }

        fn from_byte(byte: u8) -> Self {
            Narrow(byte)
        }

        fn value_to_base(value: i32) -> Option<NarrowBase> {
            u8::try_from(value).ok().map(NarrowBase)
        }

        fn base_to_value(base: NarrowBase) -> Option<i32> {
            Some(i32::from(base.0))
        }
    }

    fn narrow(key: &[u8]) -> Vec<Narrow> {
        key.iter().copied().map(Narrow).collect()
    }

    fn order_err(a: &str, b: &str) -> InsertError<u8> {
        InsertError::Order(a.as_bytes().to_vec(), b.as_bytes().to_vec())
    }

    fn build_dict<'a>(
        words: impl IntoIterator<Item = &'a str>,
    ) -> Result<DawgDict<u8>, InsertError<u8>> {
        let mut builder = DawgBuilder::new();
        for (value, word) in words.into_iter().enumerate() {
            builder.insert(word, value as i32)?;
        }
        Ok(builder.build().unwrap())
    }

    #[test]
    fn sorted_input_words_gives_no_error() {
        let res = build_dict(["ALFA", "BRAVO", "CHARLIE", "DELTA"]);
        assert!(res.is_ok());
    }

    #[test]
    fn unsorted_input_words_gives_error() {
        use itertools::Itertools;
        const SORTED_WORDS: [&str; 7] =
            ["ALFA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "FOXTROT", "GOLF"];
        let mut sorted_count = 0;
        // Go through all possible permutations and see that each permutation except the sorted one
        // returns an error.
        for wordlist in SORTED_WORDS.iter().copied().permutations(SORTED_WORDS.len()) {
            let is_sorted = wordlist == SORTED_WORDS;
            let res = build_dict(wordlist);
            assert_eq!(res.is_ok(), is_sorted);
            sorted_count += is_sorted as i32;
        }

        assert_eq!(sorted_count, 1);
    }

    #[test]
    fn same_word_twice_in_input_words_gives_error() {
        let res = build_dict(["ALFA", "BRAVO", "CHARLIE", "CHARLIE"]);
        assert_eq!(res.unwrap_err(), order_err("CHARLIE", "CHARLIE"));
    }

    #[test]
    fn unsorted_input_words_gives_unsorted_words_in_error() {
        let res = build_dict(["ALFA", "BRAVO", "CHARLIE", "DELTA", "ECHO", "GOLF", "FOXTROT"]);
        assert_eq!(res.unwrap_err(), order_err("GOLF", "FOXTROT"));

        let res = build_dict(["ZULU", "ALFA"]);
        assert_eq!(res.unwrap_err(), order_err("ZULU", "ALFA"));
    }

    #[test]
    fn prefix_after_longer_key_gives_error() {
        let res = build_dict(["BUGA", "BUG"]);
        assert_eq!(res.unwrap_err(), order_err("BUGA", "BUG"));
        assert!(build_dict(["BUG", "BUGA"]).is_ok());
    }

    #[test]
    fn invalid_keys_are_rejected() {
        let mut builder = DawgBuilder::<u8>::new();
        assert_eq!(builder.insert("", 1), Err(InsertError::EmptyKey));
        assert_eq!(
            builder.insert(&b"bu\0ga"[..], 1),
            Err(InsertError::EmbeddedTerminator { position: 2 })
        );
        assert_eq!(builder.insert("bugaga", -1), Err(InsertError::NegativeValue(-1)));
        assert!(builder.is_empty());
    }

    #[test]
    fn failed_insert_leaves_builder_untouched() {
        let mut builder = DawgBuilder::<u8>::new();
        builder.insert("bugagb", 2).unwrap();
        assert!(builder.insert("bugaga", 1).is_err());
        assert!(builder.insert("bugagb", 3).is_err());
        assert!(builder.insert("bugagc", -3).is_err());
        builder.insert("bugagc", 3).unwrap();
        assert_eq!(builder.len(), 2);

        let dict = builder.build().unwrap();
        assert_eq!(dict.find("bugagb"), 2);
        assert_eq!(dict.find("bugagc"), 3);
        assert_eq!(dict.find("bugaga"), -1);
    }

    #[test]
    fn nul_terminated_keys() {
        let mut builder = DawgBuilder::<u16>::new();
        let key: Vec<u16> = "bugaga\0tail".encode_utf16().collect();
        builder.insert_nul_terminated(&key, 1).unwrap();
        assert_eq!(builder.insert_nul_terminated(&[0], 2), Err(InsertError::EmptyKey));
        assert_eq!(
            builder.insert_nul_terminated(&[u16::from(b'z')], 2),
            Err(InsertError::Unterminated)
        );

        let dict = builder.build().unwrap();
        assert_eq!(dict.find("bugaga"), 1);
        assert_eq!(dict.find("bugaga\0tail"), -1);
    }

    #[test]
    fn c_string_keys() {
        let mut builder = DawgBuilder::<u8>::new();
        builder.insert(c"bugaga", 1).unwrap();
        builder.insert(c"bugora", 4).unwrap();
        let dict = builder.build().unwrap();
        assert_eq!(dict.find(c"bugora"), 4);
    }

    #[test]
    fn map_is_inserted_atomically() {
        let mut builder = DawgBuilder::<u8>::new();
        builder.insert("b", 0).unwrap();

        let bad = BTreeMap::from([("a".to_string(), 1), ("c".to_string(), 2)]);
        assert_eq!(builder.insert_map(&bad), Err(order_err("b", "a")));

        let negative = BTreeMap::from([("c".to_string(), 1), ("d".to_string(), -2)]);
        assert_eq!(builder.insert_map(&negative), Err(InsertError::NegativeValue(-2)));
        assert_eq!(builder.len(), 1);

        let good = BTreeMap::from([("c".to_string(), 1), ("d".to_string(), 2)]);
        builder.insert_map(&good).unwrap();
        assert_eq!(builder.len(), 3);

        let dict = builder.build().unwrap();
        assert_eq!(dict.find("b"), 0);
        assert_eq!(dict.find("c"), 1);
        assert_eq!(dict.find("d"), 2);
    }

    #[test]
    fn unsorted_entries_are_sorted_first() {
        let mut builder = DawgBuilder::<i8>::new();
        // -1 is 0xff and sorts after every ASCII unit
        let entries = vec![(vec![-1i8], 3), (vec![98], 2), (vec![97, 1], 1)];
        builder.insert_unsorted(entries).unwrap();
        let dict = builder.build().unwrap();
        assert_eq!(dict.find([-1i8]), 3);
        assert_eq!(dict.find([98i8]), 2);
        assert_eq!(dict.find([97i8, 1]), 1);

        let mut builder = DawgBuilder::<u8>::new();
        let repeated = vec![("x", 1), ("y", 2), ("x", 3)];
        assert!(matches!(builder.insert_unsorted(repeated), Err(InsertError::Order(..))));
        assert!(builder.is_empty());
    }

    #[test]
    fn clear_resets_the_builder() {
        let mut builder = DawgBuilder::<u8>::new();
        builder.insert("zulu", 1).unwrap();
        builder.clear();
        assert!(builder.is_empty());
        builder.insert("alfa", 2).unwrap();
        let dict = builder.build().unwrap();
        assert_eq!(dict.find("alfa"), 2);
        assert_eq!(dict.find("zulu"), -1);
    }

    #[test]
    fn finish_clears_the_builder() {
        let mut builder = DawgBuilder::<u8>::new();
        builder.insert("zulu", 1).unwrap();
        let mut dict = DawgDict::default();
        builder.finish(&mut dict).unwrap();
        assert!(builder.is_empty());
        // a smaller key is accepted again after the reset
        builder.insert("alfa", 1).unwrap();
    }

    #[test]
    fn empty_build() {
        let dict = DawgBuilder::<u8>::new().build().unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.states_count(), 1);
        assert_eq!(dict.transitions_count(), 0);
        assert_eq!(dict.size(), 1);
        assert_eq!(dict.find("a"), -1);
    }

    #[test]
    fn signed_map_keys_follow_unsigned_order() {
        // in map order [-1] comes first, but 0xff sorts after every other unit
        let entries = BTreeMap::from([(vec![-1i8], 3), (vec![1i8], 1), (vec![1i8, -2], 2)]);
        let mut builder = DawgBuilder::<i8>::new();
        builder.insert_map(&entries).unwrap();
        assert_eq!(builder.len(), 3);

        let dict = builder.build().unwrap();
        assert_eq!(dict.find([-1i8]), 3);
        assert_eq!(dict.find([1i8, -2]), 2);
        let values: Vec<_> = dict.entries().map(|(_, value)| value).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn failed_build_keeps_the_old_dict() {
        let mut builder = DawgBuilder::<Narrow>::new();
        builder.insert(narrow(b"ok"), 1).unwrap();
        let mut dict = DawgDict::default();
        builder.finish(&mut dict).unwrap();
        let before = dict.clone();

        // far more cells than an 8-bit index can address
        for i in 0..200u8 {
            let key = [b'a' + i / 26, b'a' + i % 26];
            builder.insert(narrow(&key), i32::from(i)).unwrap();
        }
        let res = builder.finish(&mut dict);
        assert!(matches!(res, Err(BuildError::CapacityExceeded { .. })));
        assert_eq!(dict, before);
        assert_eq!(dict.find(narrow(b"ok")), 1);
        assert!(builder.is_empty());

        // the builder starts over from scratch
        builder.insert(narrow(b"ab"), 2).unwrap();
        let dict = builder.build().unwrap();
        assert_eq!(dict.find(narrow(b"ab")), 2);
        assert_eq!(dict.find(narrow(b"ok")), -1);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn value_wider_than_a_cell() {
        let mut builder = DawgBuilder::<Narrow>::new();
        builder.insert(narrow(b"big"), 300).unwrap();
        assert_eq!(builder.build(), Err(BuildError::ValueOutOfRange(300)));
    }

    #[test]
    fn compare_keys_uses_unsigned_units() {
        assert_eq!(compare_keys::<i8>(&[-1], &[1]), Ordering::Greater);
        assert_eq!(compare_keys::<u8>(b"ab", b"abc"), Ordering::Less);
        assert_eq!(compare_keys::<u8>(b"abc", b"abc"), Ordering::Equal);
    }
}
