use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tri-state presence marker for optional payload fields.
///
/// Distinguishes a key absent from the inbound request (`Unset`) from one
/// explicitly set to `null` (`Null`). Combined with
/// `#[serde(default, skip_serializing_if = "Maybe::is_unset")]`, unset fields
/// are omitted from the outbound payload entirely while explicit nulls are
/// forwarded as nulls — the upstream service treats the two differently for
/// some fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Maybe<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> Maybe<T> {
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the contained value, collapsing `Unset` and `Null` to `None`.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Null, Self::Value))
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => serializer.serialize_some(v),
        }
    }
}
