use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Integer type used to store values in a dictionary.
///
/// Stored values are always non-negative; [`DictValue::NONE`] (−1) is reserved
/// to signal a missing key.
pub trait DictValue: Copy + Eq + Ord + Hash + Debug + Display + Default + Into<i64> {
    /// The "no value" sentinel returned by lookups that miss.
    const NONE: Self;

    /// True if the value is below zero and therefore cannot be stored.
    fn is_negative(self) -> bool;
}

/// Integer type used to address states in a compiled dictionary.
pub trait DictBase: Copy + Eq + Ord + Hash + Debug + Default {
    /// Converts a cell position, failing if it does not fit.
    fn from_usize(n: usize) -> Option<Self>;

    /// Converts back to a cell position.
    fn to_usize(self) -> usize;
}

/// Trait for code-unit types that can serve as keys of a word dictionary.
///
/// Bundles the four scalar types fixed by a character width:
///
/// - `Self`: the code unit keys are made of
/// - [`Unsigned`](DictChar::Unsigned): the unsigned counterpart, used as the
///   transition label and for all ordering
/// - [`Value`](DictChar::Value): the value integer
/// - [`Base`](DictChar::Base): the state-index integer
///
/// The terminator code unit is the one whose unsigned counterpart is zero.
pub trait DictChar: Copy + Eq + Ord + Hash + Debug + Default + 'static {
    /// Unsigned counterpart of the code unit.
    type Unsigned: Copy + Eq + Ord + Hash + Debug + Default;
    /// Value integer associated with a key.
    type Value: DictValue;
    /// State-index integer of the compiled automaton.
    type Base: DictBase;

    /// Reinterprets the code unit as its unsigned counterpart.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterprets an unsigned label as a code unit.
    fn from_unsigned(label: Self::Unsigned) -> Self;

    /// Widens a single byte into a code unit.
    fn from_byte(byte: u8) -> Self;

    /// Stores a (non-negative) value in a state-index cell.
    fn value_to_base(value: Self::Value) -> Option<Self::Base>;

    /// Reads back a value stored with [`value_to_base`](DictChar::value_to_base).
    fn base_to_value(base: Self::Base) -> Option<Self::Value>;

    /// True if this code unit is the terminator.
    #[inline]
    fn is_terminator(self) -> bool {
        self.to_unsigned() == Self::Unsigned::default()
    }
}

macro_rules! impl_dict_value {
    ($($value:ty),*) => {$(
        impl DictValue for $value {
            const NONE: Self = -1;

            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }
        }
    )*};
}

macro_rules! impl_dict_base {
    ($($base:ty),*) => {$(
        impl DictBase for $base {
            #[inline]
            fn from_usize(n: usize) -> Option<Self> {
                Self::try_from(n).ok()
            }

            #[inline]
            fn to_usize(self) -> usize {
                // Positions beyond the address space cannot be indexed anyway.
                usize::try_from(self).unwrap_or(usize::MAX)
            }
        }
    )*};
}

macro_rules! impl_dict_char {
    ($($ch:ty => ($unsigned:ty, $value:ty, $base:ty)),* $(,)?) => {$(
        impl DictChar for $ch {
            type Unsigned = $unsigned;
            type Value = $value;
            type Base = $base;

            #[inline]
            fn to_unsigned(self) -> $unsigned {
                self as $unsigned
            }

            #[inline]
            fn from_unsigned(label: $unsigned) -> Self {
                label as $ch
            }

            #[inline]
            fn from_byte(byte: u8) -> Self {
                byte as $ch
            }

            #[inline]
            fn value_to_base(value: $value) -> Option<$base> {
                <$base>::try_from(value).ok()
            }

            #[inline]
            fn base_to_value(base: $base) -> Option<$value> {
                <$value>::try_from(base).ok()
            }
        }
    )*};
}

impl_dict_value!(i32, i64);
impl_dict_base!(u32, u64);
impl_dict_char! {
    u8 => (u8, i32, u32),
    i8 => (u8, i32, u32),
    u16 => (u16, i64, u64),
    i16 => (u16, i64, u64),
    u32 => (u32, i64, u64),
}
