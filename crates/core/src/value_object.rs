//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two carts
/// holding the same lines are the same cart. To "modify" one, build a new
/// value with the new attributes. This is what gives the presentation
/// layer reference-distinct snapshots to diff against.
///
/// The trait requires `Clone` (values are copied, not referenced),
/// `PartialEq` (compared by attributes) and `Debug` (loggable/testable).
/// `Eq` is deliberately not required: values carrying prices hold floats.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
