//! Rkyv implementation for `IntSet`.
//!
//! The archive holds the byte encoding (see [`IntSet::to_bytes`]) rather
//! than raw words, so archives written on 32-bit and 64-bit targets are
//! interchangeable.

use rkyv::{
    Archive, Deserialize, Serialize,
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::ArchivedVec,
};

use crate::IntSet;

/// The archived version of IntSet.
pub type ArchivedIntSet = ArchivedVec<u8>;

/// The resolver for IntSet.
pub type IntSetResolver = rkyv::vec::VecResolver;

impl Archive for IntSet {
    type Archived = ArchivedIntSet;
    type Resolver = IntSetResolver;

    fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
        ArchivedVec::resolve_from_len(self.encoded_len(), resolver, out);
    }
}

impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for IntSet {
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        ArchivedVec::<u8>::serialize_from_slice(&self.to_bytes(), serializer)
    }
}

impl<D: Fallible + ?Sized> Deserialize<IntSet, D> for ArchivedIntSet {
    #[inline]
    fn deserialize(&self, _deserializer: &mut D) -> Result<IntSet, D::Error> {
        Ok(IntSet::from_bytes(self.as_slice()))
    }
}
