//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and defined entirely by their attribute values:
/// two with the same values are the same value. `Slug` and `Capability` are
/// value objects; `EntityRecord` (which carries an id) is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
