//! # Three-State Field Values
//!
//! A nullable optional field on the wire has three distinguishable states:
//! the key is missing, the key is present with `null`, or the key carries a
//! value. [`Field<T>`] keeps all three. Optional fields that may not be
//! null use plain `Option<T>` instead.

/// Value of a nullable optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// The key was not present and the caller never set it. Not encoded.
    #[default]
    Absent,
    /// The key was present with a JSON `null`. Encoded as `null`.
    Null,
    /// The key holds a concrete value.
    Present(T),
}

impl<T> Field<T> {
    /// Map `Some` to [`Field::Present`] and `None` to [`Field::Null`].
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Null,
        }
    }

    /// Returns `true` if the field is not set.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the field holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Mutably borrow the value, if any.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Consume the field, returning the value if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Convert `&Field<T>` into `Field<&T>`.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(v) => Field::Present(v),
        }
    }

    /// Apply `f` to a present value, leaving absent and null untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(v) => Field::Present(f(v)),
        }
    }

    /// Take the field out, leaving [`Field::Absent`] in its place.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}
