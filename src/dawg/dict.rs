use super::builder::{BuildError, IntoKey};
use super::char_trait::{DictBase, DictChar, DictValue};
use super::registry::{DictStats, StateRegistry};
use super::state::{State, StateId};

/// Position of the cell that points at the root state.
const ROOT_CELL: usize = 0;

/// One transition of the compiled automaton.
///
/// A state is the run of cells starting at its index and ending at the first
/// cell flagged `last`; labels within a run are ascending, so a terminator
/// (label 0) always comes first. A terminator cell stores the key's value in
/// `target` instead of a state index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell<C: DictChar> {
    label: C::Unsigned,
    target: C::Base,
    last: bool,
}

/// A compiled, read-only word dictionary.
///
/// Produced by [`DawgBuilder::finish`](super::builder::DawgBuilder::finish).
/// States are addressed by `C::Base` indices, starting from [`root`](DawgDict::root).
///
/// # Examples
///
/// ```
/// use worddict::DawgBuilder;
///
/// let mut builder = DawgBuilder::<u8>::new();
/// builder.insert("bug", 1).unwrap();
/// builder.insert("bugaga", 2).unwrap();
/// let dict = builder.build().unwrap();
///
/// let mut idx = dict.root();
/// assert!(dict.follow_key("bug", &mut idx));
/// assert!(dict.has_value(idx));
/// assert!(dict.follow_key("ag", &mut idx));
/// assert!(!dict.has_value(idx));
/// assert_eq!(dict.find("bugaga"), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DawgDict<C: DictChar> {
    cells: Vec<Cell<C>>,
    keys: usize,
    stats: DictStats,
}

impl<C: DictChar> Default for DawgDict<C> {
    fn default() -> Self {
        DawgDict {
            cells: vec![Cell {
                label: C::Unsigned::default(),
                target: C::Base::default(),
                last: true,
            }],
            keys: 0,
            stats: DictStats::default(),
        }
    }
}

impl<C: DictChar> DawgDict<C> {
    /// Lays out the canonical states of `registry` as cell runs.
    pub(crate) fn compile(
        registry: &StateRegistry<C>,
        root: StateId,
        keys: usize,
    ) -> Result<Self, BuildError> {
        let mut stats = registry.stats();
        let size = stats.transitions + 1;
        stats.size = size;
        let base = |pos: usize| {
            <C::Base as DictBase>::from_usize(pos)
                .ok_or(BuildError::CapacityExceeded { cells: size })
        };
        base(size)?;

        // Children are interned before their parents, so walking ids downwards
        // places the root first. States without transitions (the sink, or the root
        // of an empty dictionary) get no run and are addressed as the root cell.
        let mut offsets = vec![ROOT_CELL; registry.len()];
        let mut cursor = ROOT_CELL + 1;
        for id in (0..registry.len()).rev() {
            let count = registry.get(id).transition_count();
            if count > 0 {
                offsets[id] = cursor;
                cursor += count;
            }
        }

        let mut cells = Vec::with_capacity(size);
        cells.push(Cell {
            label: C::Unsigned::default(),
            target: base(offsets[root])?,
            last: true,
        });
        for id in (0..registry.len()).rev() {
            let state = registry.get(id);
            let count = state.transition_count();
            for (i, &(label, child)) in state.transitions().iter().enumerate() {
                let target = if label == C::Unsigned::default() {
                    stored_value(state)?
                } else {
                    base(offsets[child])?
                };
                cells.push(Cell {
                    label,
                    target,
                    last: i + 1 == count,
                });
            }
        }
        debug_assert_eq!(cells.len(), size);

        Ok(DawgDict { cells, keys, stats })
    }

    /// The state the automaton starts in.
    #[inline]
    pub fn root(&self) -> C::Base {
        self.cells[ROOT_CELL].target
    }

    /// Returns the state `label`'s transition from `idx` leads to, or None if no
    /// such transition exists.
    #[inline]
    pub fn child(&self, idx: C::Base, label: C) -> Option<C::Base> {
        let label = label.to_unsigned();
        if label == C::Unsigned::default() {
            return None;
        }
        let mut pos = idx.to_usize();
        while let Some(cell) = self.cells.get(pos) {
            if cell.label == label {
                return Some(cell.target);
            }
            if cell.last || cell.label > label {
                return None;
            }
            pos += 1;
        }
        None
    }

    /// Takes the transition for `label` from `idx`.
    ///
    /// On success `idx` is moved to the target state; otherwise it is left alone.
    #[inline]
    pub fn follow(&self, label: C, idx: &mut C::Base) -> bool {
        match self.child(*idx, label) {
            Some(next) => {
                *idx = next;
                true
            }
            None => false,
        }
    }

    /// Follows every code unit of `key` in order.
    ///
    /// Stops at the first missing transition, leaving `idx` at the last state
    /// reached, and returns whether the whole key was consumed.
    pub fn follow_key(&self, key: impl IntoKey<C>, idx: &mut C::Base) -> bool {
        key.collect_key().iter().all(|&ch| self.follow(ch, idx))
    }

    /// True if a key ends at state `idx`.
    #[inline]
    pub fn has_value(&self, idx: C::Base) -> bool {
        self.value_cell(idx).is_some()
    }

    /// The value of the key ending at state `idx`.
    #[inline]
    pub fn value(&self, idx: C::Base) -> Option<C::Value> {
        self.value_cell(idx)
            .and_then(|cell| C::base_to_value(cell.target))
    }

    fn value_cell(&self, idx: C::Base) -> Option<&Cell<C>> {
        let pos = idx.to_usize();
        if pos == ROOT_CELL {
            return None;
        }
        self.cells
            .get(pos)
            .filter(|cell| cell.label == C::Unsigned::default())
    }

    /// Returns the value stored for `key`, if any.
    pub fn get(&self, key: impl IntoKey<C>) -> Option<C::Value> {
        let mut idx = self.root();
        if self.follow_key(key, &mut idx) {
            self.value(idx)
        } else {
            None
        }
    }

    /// Returns the value stored for `key`, or [`DictValue::NONE`] (−1) on a miss.
    pub fn find(&self, key: impl IntoKey<C>) -> C::Value {
        self.get(key).unwrap_or(<C::Value as DictValue>::NONE)
    }

    /// True if `key` is stored.
    pub fn contains(&self, key: impl IntoKey<C>) -> bool {
        self.get(key).is_some()
    }

    /// True if any stored key starts with `prefix`.
    pub fn has_prefix(&self, prefix: impl IntoKey<C>) -> bool {
        let mut idx = self.root();
        self.follow_key(prefix, &mut idx) && !self.is_empty()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.keys
    }

    /// True if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.keys == 0
    }

    /// Build counters.
    pub fn stats(&self) -> DictStats {
        self.stats
    }

    /// Number of distinct states.
    pub fn states_count(&self) -> usize {
        self.stats.states
    }

    /// Number of transitions, terminator transitions included.
    pub fn transitions_count(&self) -> usize {
        self.stats.transitions
    }

    /// Number of state freezes that were resolved to an existing state.
    pub fn merged_states_count(&self) -> usize {
        self.stats.merged_states
    }

    /// Number of merges that folded a state with outgoing transitions.
    pub fn merging_states_count(&self) -> usize {
        self.stats.merging_states
    }

    /// Number of transitions dropped by merging states that had them.
    pub fn merged_transitions_count(&self) -> usize {
        self.stats.merged_transitions
    }

    /// Number of cells in the compiled layout.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Iterates over all keys and their values in ascending key order.
    pub fn entries(&self) -> Entries<'_, C> {
        self.entries_at(self.root(), Vec::new())
    }

    /// Iterates over the keys starting with `prefix`, in ascending order.
    pub fn entries_with_prefix(&self, prefix: impl IntoKey<C>) -> Entries<'_, C> {
        let prefix = prefix.collect_key();
        let mut idx = self.root();
        if self.follow_key(prefix.as_slice(), &mut idx) {
            self.entries_at(idx, prefix.to_vec())
        } else {
            self.entries_at(C::Base::default(), Vec::new())
        }
    }

    fn entries_at(&self, idx: C::Base, key: Vec<C>) -> Entries<'_, C> {
        let start = idx.to_usize();
        let frames = if start == ROOT_CELL {
            Vec::new()
        } else {
            vec![Frame::run(&self.cells, start)]
        };
        Entries {
            cells: &self.cells,
            frames,
            key,
        }
    }
}

/// Value of a key-end state as a cell target.
///
/// The built-in widths always fit; a custom `DictChar` with a narrower `Base` can fail.
fn stored_value<C: DictChar>(state: &State<C>) -> Result<C::Base, BuildError> {
    let value = state.value().unwrap_or(<C::Value as DictValue>::NONE);
    C::value_to_base(value).ok_or(BuildError::ValueOutOfRange(value.into()))
}

/// Cursor over the cell run of one state.
#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: usize,
    end: usize,
}

impl Frame {
    fn run<C: DictChar>(cells: &[Cell<C>], start: usize) -> Frame {
        let len = cells
            .get(start..)
            .and_then(|run| run.iter().position(|cell| cell.last))
            .map_or(0, |i| i + 1);
        Frame {
            pos: start,
            end: start + len,
        }
    }
}

/// An iterator over the keys of a [`DawgDict`] and their values, in ascending order.
///
/// Created by [`DawgDict::entries`] and [`DawgDict::entries_with_prefix`].
#[derive(Clone)]
pub struct Entries<'d, C: DictChar> {
    cells: &'d [Cell<C>],
    frames: Vec<Frame>,
    key: Vec<C>,
}

impl<C: DictChar> Iterator for Entries<'_, C> {
    type Item = (Vec<C>, C::Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.frames.last_mut()?;
            if frame.pos == frame.end {
                self.frames.pop();
                self.key.pop();
                continue;
            }
            let cell = self.cells[frame.pos];
            frame.pos += 1;

            if cell.label == C::Unsigned::default() {
                if let Some(value) = C::base_to_value(cell.target) {
                    return Some((self.key.clone(), value));
                }
                continue;
            }
            self.key.push(C::from_unsigned(cell.label));
            self.frames.push(Frame::run(self.cells, cell.target.to_usize()));
        }
    }
}
