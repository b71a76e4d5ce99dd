//! Representation kinds and the `Classify` capability.
//!
//! Every type that can sit inside a [`Possibly`](crate::Possibly) reports which
//! representation family it belongs to. Families that can hold a null or
//! empty handle are *nilable*; everything else is a value kind and is
//! always present.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{self, Arc};
use std::time::Duration;

/// Representation family of a classified value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    /// No usable representation at all. Always absent.
    Invalid,
    /// Numbers, text, booleans, fixed aggregates. Never absent.
    Value,
    Pointer,
    Interface,
    /// Growable sequence; its nil state is "no elements and no allocation".
    Sequence,
    Map,
    Channel,
    Func,
    UnsafePointer,
}

impl Kind {
    /// Whether values of this kind can be in a nil state.
    pub const fn is_nilable(self) -> bool {
        !matches!(self, Kind::Invalid | Kind::Value)
    }
}

/// Capability implemented by every type a [`Possibly`](crate::Possibly) can wrap.
///
/// Value types report [`Kind::Value`] and keep the default `is_nil`. Use
/// [`value_kind!`](crate::value_kind) to declare your own plain aggregates.
pub trait Classify {
    fn kind(&self) -> Kind;

    /// Whether the handle is null. For sequences, whether they are in their zero state.
    #[inline]
    fn is_nil(&self) -> bool {
        false
    }
}

/// Decide whether `value` counts as absent.
///
/// `Invalid` is absent, value kinds are present, a zero-state sequence is
/// present when `treat_empty_container_as_present` is set, and any other
/// nilable value is absent exactly when it is nil.
pub fn classify_absent<T: Classify + ?Sized>(value: &T, treat_empty_container_as_present: bool) -> bool {
    let kind = value.kind();
    if kind == Kind::Invalid {
        return true;
    }
    if !kind.is_nilable() {
        return false;
    }
    let nil = value.is_nil();
    if kind == Kind::Sequence && treat_empty_container_as_present && nil {
        return false;
    }
    nil
}

/// Implement [`Classify`] as [`Kind::Value`] for the listed types.
///
/// ```
/// use salvation::{value_kind, Possibly};
///
/// #[derive(Debug)]
/// struct Point { x: i32, y: i32 }
/// value_kind!(Point);
///
/// assert!(Possibly::new(Point { x: 0, y: 0 }).is_present());
/// ```
#[macro_export]
macro_rules! value_kind {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::Classify for $ty {
                #[inline]
                fn kind(&self) -> $crate::Kind { $crate::Kind::Value }
            }
        )*
    };
}

value_kind!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String, str, Duration,
);

impl<T, const N: usize> Classify for [T; N] {
    #[inline]
    fn kind(&self) -> Kind { Kind::Value }
}

macro_rules! tuple_value_kind {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name),+> Classify for ($($name,)+) {
                #[inline]
                fn kind(&self) -> Kind { Kind::Value }
            }
        )*
    };
}

tuple_value_kind!((A), (A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E), (A, B, C, D, E, F));

// ————————————————————————————————————————————————————————————————————————————
// Pointer-shaped
// ————————————————————————————————————————————————————————————————————————————

impl<T> Classify for Option<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Pointer }
    #[inline]
    fn is_nil(&self) -> bool { self.is_none() }
}

impl<T: ?Sized> Classify for rc::Weak<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Pointer }
    #[inline]
    fn is_nil(&self) -> bool { self.strong_count() == 0 }
}

impl<T: ?Sized> Classify for sync::Weak<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Pointer }
    #[inline]
    fn is_nil(&self) -> bool { self.strong_count() == 0 }
}

// Owning and borrowing pointers are never null.
macro_rules! non_null_pointer {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Classify for $ty<T> {
                #[inline]
                fn kind(&self) -> Kind { Kind::Pointer }
            }
        )*
    };
}

non_null_pointer!(Box, Rc, Arc, NonNull);

impl<T: ?Sized> Classify for &T {
    #[inline]
    fn kind(&self) -> Kind { Kind::Pointer }
}

impl<T: ?Sized> Classify for &mut T {
    #[inline]
    fn kind(&self) -> Kind { Kind::Pointer }
}

impl<T: ?Sized> Classify for *const T {
    #[inline]
    fn kind(&self) -> Kind { Kind::UnsafePointer }
    #[inline]
    fn is_nil(&self) -> bool { self.is_null() }
}

impl<T: ?Sized> Classify for *mut T {
    #[inline]
    fn kind(&self) -> Kind { Kind::UnsafePointer }
    #[inline]
    fn is_nil(&self) -> bool { self.is_null() }
}

// ————————————————————————————————————————————————————————————————————————————
// Containers
// ————————————————————————————————————————————————————————————————————————————

// Zero-sized elements never allocate and report `usize::MAX` capacity.
#[inline]
fn unallocated<T>(capacity: usize) -> bool {
    capacity == 0 || core::mem::size_of::<T>() == 0
}

impl<T> Classify for Vec<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Sequence }
    #[inline]
    fn is_nil(&self) -> bool { self.is_empty() && unallocated::<T>(self.capacity()) }
}

impl<T> Classify for VecDeque<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Sequence }
    #[inline]
    fn is_nil(&self) -> bool { self.is_empty() && unallocated::<T>(self.capacity()) }
}

impl<K, V, S> Classify for HashMap<K, V, S> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Map }
    #[inline]
    fn is_nil(&self) -> bool { self.capacity() == 0 }
}

impl<T, S> Classify for HashSet<T, S> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Map }
    #[inline]
    fn is_nil(&self) -> bool { self.capacity() == 0 }
}

// An empty B-tree owns no nodes.
impl<K, V> Classify for BTreeMap<K, V> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Map }
    #[inline]
    fn is_nil(&self) -> bool { self.is_empty() }
}

impl<T> Classify for BTreeSet<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Map }
    #[inline]
    fn is_nil(&self) -> bool { self.is_empty() }
}

// ————————————————————————————————————————————————————————————————————————————
// Handles
// ————————————————————————————————————————————————————————————————————————————

impl<T> Classify for Sender<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Channel }
}

impl<T> Classify for SyncSender<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Channel }
}

impl<T> Classify for Receiver<T> {
    #[inline]
    fn kind(&self) -> Kind { Kind::Channel }
}

macro_rules! fn_pointer {
    ($(($($arg:ident),*)),* $(,)?) => {
        $(
            impl<R, $($arg),*> Classify for fn($($arg),*) -> R {
                #[inline]
                fn kind(&self) -> Kind { Kind::Func }
            }
        )*
    };
}

fn_pointer!((), (A), (A, B), (A, B, C));
