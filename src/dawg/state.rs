use smallvec::SmallVec;

use super::char_trait::DictChar;

/// Index of a canonical state in the interning table.
pub(crate) type StateId = usize;

/// An outgoing edge: unsigned label and canonical target.
pub(crate) type Transition<C> = (<C as DictChar>::Unsigned, StateId);

/// A state of the automaton under construction.
///
/// Children are referenced by canonical id, so two states are equivalent exactly
/// when their values and transition lists compare equal. Deriving `Hash`/`Eq`
/// gives the content address used by the interning table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct State<C: DictChar> {
    value: Option<C::Value>,
    transitions: SmallVec<[Transition<C>; 2]>,
}

impl<C: DictChar> State<C> {
    /// Terminal value, if the state ends a key.
    #[inline]
    pub(crate) fn value(&self) -> Option<C::Value> {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: C::Value) {
        self.value = Some(value);
    }

    /// Outgoing transitions in ascending label order.
    #[inline]
    pub(crate) fn transitions(&self) -> &[Transition<C>] {
        &self.transitions
    }

    /// Number of outgoing transitions.
    #[inline]
    pub(crate) fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Appends a transition to an already frozen child.
    ///
    /// Labels arrive in ascending order because keys do.
    pub(crate) fn push(&mut self, label: C::Unsigned, child: StateId) {
        debug_assert!(
            self.transitions.last().map_or(true, |&(last, _)| last < label),
            "transitions must be added in ascending label order"
        );
        self.transitions.push((label, child));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_transitions() {
        let s = State::<u8>::default();
        assert_eq!(s.transition_count(), 0);
        assert_eq!(s.value(), None);
    }

    #[test]
    fn equality_is_structural() {
        let mut a = State::<u8>::default();
        let mut b = State::<u8>::default();
        a.push(0, 3);
        a.push(b'x', 5);
        b.push(0, 3);
        b.push(b'x', 5);
        assert_eq!(a, b);

        a.set_value(1);
        assert_ne!(a, b);
        b.set_value(1);
        assert_eq!(a, b);
    }

    #[test]
    fn children_compared_by_id() {
        let mut a = State::<u16>::default();
        let mut b = State::<u16>::default();
        a.push(u16::from(b'a'), 1);
        b.push(u16::from(b'a'), 2);
        assert_ne!(a, b);
    }
}
