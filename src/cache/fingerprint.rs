//! Cache keys derived from a value's shape and identity bytes

use crate::model::Root;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Opaque, comparable identity of a value used as a cache key
///
/// Derived with BLAKE3 over the length-delimited type shape followed by the
/// length-delimited identity bytes, so two different shapes can never
/// produce the same key for the same payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Derive a fingerprint from a shape descriptor and identity bytes
    pub fn derive(shape: &str, identity: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(shape.len() as u64).to_le_bytes());
        hasher.update(shape.as_bytes());
        hasher.update(&(identity.len() as u64).to_le_bytes());
        hasher.update(identity);
        Fingerprint(*hasher.finalize().as_bytes())
    }

    /// Structural fingerprint of any serde-serializable value
    pub fn of_serialize<T: Serialize + ?Sized>(shape: &str, value: &T) -> Result<Self> {
        let bytes = bincode::serialize(value)?;
        Ok(Self::derive(shape, &bytes))
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Fingerprint(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", &self.to_hex()[..8])
    }
}

/// A value that can report a stable identity for root caching
///
/// `identity_bytes` must change whenever the value's serialized content
/// changes, and `shape` must distinguish types whose encodings could
/// coincide (a `u64` and an 8-byte vector, for instance).
pub trait Identity {
    /// Descriptor of the value's type shape
    fn shape(&self) -> Cow<'_, str>;

    /// Canonical bytes identifying the value
    fn identity_bytes(&self) -> Cow<'_, [u8]>;

    /// Cache key for this value
    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::derive(&self.shape(), &self.identity_bytes())
    }
}

impl<T: Identity + ?Sized> Identity for &T {
    fn shape(&self) -> Cow<'_, str> {
        (**self).shape()
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        (**self).identity_bytes()
    }
}

impl Identity for [u8] {
    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("list<u8>")
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Identity for Vec<u8> {
    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("list<u8>")
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> Identity for [u8; N] {
    fn shape(&self) -> Cow<'_, str> {
        Cow::Owned(format!("vector<u8,{}>", N))
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Identity for Root {
    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("root")
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Identity for bool {
    fn shape(&self) -> Cow<'_, str> {
        Cow::Borrowed("bool")
    }

    fn identity_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Owned(vec![u8::from(*self)])
    }
}

macro_rules! impl_identity_for_uint {
    ($($ty:ty => $shape:literal),* $(,)?) => {
        $(
            impl Identity for $ty {
                fn shape(&self) -> Cow<'_, str> {
                    Cow::Borrowed($shape)
                }

                fn identity_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_le_bytes().to_vec())
                }
            }
        )*
    };
}

impl_identity_for_uint! {
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    u128 => "uint128",
}
