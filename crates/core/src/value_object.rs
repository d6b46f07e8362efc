//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are the same value. To "modify" one, build
/// a new one. Catalog entries and committed order lines are value objects;
/// the session is not (it has identity and mutates over its lifetime).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
