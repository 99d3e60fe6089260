use std::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashTable};

use super::char_trait::DictChar;
use super::state::{State, StateId};

/// Counters describing a built automaton.
///
/// Accumulated by the interning table over a whole build and handed over to the
/// compiled dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DictStats {
    /// Distinct canonical states.
    pub states: usize,
    /// Transitions across all canonical states.
    pub transitions: usize,
    /// Freezes that resolved to an already registered state.
    pub merged_states: usize,
    /// Merges whose discarded state still had outgoing transitions.
    pub merging_states: usize,
    /// Transitions dropped together with the states discarded by those merges.
    pub merged_transitions: usize,
    /// Cells in the compiled layout.
    pub size: usize,
}

/// Content-addressed registry of canonical states.
///
/// Each structurally distinct state is stored once; its index in `states` is its
/// canonical id. The hash table only holds ids and resolves collisions by
/// comparing the stored states.
pub(crate) struct StateRegistry<C: DictChar> {
    states: Vec<State<C>>,
    table: HashTable<StateId>,
    hasher: DefaultHashBuilder,
    stats: DictStats,
}

impl<C: DictChar> StateRegistry<C> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        StateRegistry {
            states: Vec::with_capacity(capacity),
            table: HashTable::with_capacity(capacity),
            hasher: DefaultHashBuilder::default(),
            stats: DictStats::default(),
        }
    }

    /// Returns the canonical id of `state`, registering it if no equivalent state
    /// exists yet.
    ///
    /// All children of `state` must already be canonical.
    pub(crate) fn intern(&mut self, state: State<C>) -> StateId {
        debug_assert!(
            state.transitions().iter().all(|&(_, id)| id < self.states.len()),
            "Cannot intern a state unless all children are canonical"
        );

        let hash = self.hasher.hash_one(&state);
        let Self {
            states,
            table,
            hasher,
            stats,
        } = self;

        if let Some(&id) = table.find(hash, |&id| states[id] == state) {
            stats.merged_states += 1;
            if state.transition_count() > 0 {
                stats.merging_states += 1;
                stats.merged_transitions += state.transition_count();
            }
            return id;
        }

        let id = states.len();
        stats.states += 1;
        stats.transitions += state.transition_count();
        states.push(state);
        table.insert_unique(hash, id, |&id| hasher.hash_one(&states[id]));
        id
    }

    /// Canonical state by id.
    #[inline]
    pub(crate) fn get(&self, id: StateId) -> &State<C> {
        &self.states[id]
    }

    /// Number of canonical states registered so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    pub(crate) fn stats(&self) -> DictStats {
        self.stats
    }

    /// Forgets every registered state and resets the counters.
    pub(crate) fn clear(&mut self) {
        self.states.clear();
        self.table.clear();
        self.stats = DictStats::default();
    }
}
