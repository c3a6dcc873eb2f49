//! Serde implementations for `IntSet`.
//!
//! By default a set serializes as its byte encoding (see
//! [`IntSet::to_bytes`]): a base64 string in human-readable formats and raw
//! bytes otherwise. The [`sorted_set`] module offers a member-list form for
//! use with `#[serde(with = "...")]`.

use super::IntSet;
use alloc::string::String;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

/// Upper bound on bytes preallocated from an untrusted length hint.
const MAX_PREALLOC: usize = 4096;

/// Serialize and deserialize [`IntSet`] as its byte encoding.
pub mod bytes {
    use super::*;

    /// Serialize the [`IntSet`] as its byte encoding.
    ///
    /// Human-readable serializers receive a padded standard base64 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the bytes.
    pub fn serialize<S>(b: &IntSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes = b.to_bytes();
        if serializer.is_human_readable() {
            let encoded: String = data_encoding::BASE64.encode(&bytes);
            serializer.serialize_str(&encoded)
        } else {
            serializer.serialize_bytes(&bytes)
        }
    }

    /// Deserialize an [`IntSet`] from its byte encoding.
    ///
    /// Any byte length is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the base64 text is malformed or if
    /// deserialization fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<IntSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntSetVisitor;

        impl<'de> Visitor<'de> for IntSetVisitor {
            type Value = IntSet;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a bit array, as bytes or base64 text")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let decoded = data_encoding::BASE64
                    .decode(v.as_bytes())
                    .map_err(E::custom)?;
                Ok(IntSet::from_bytes(&decoded))
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(IntSet::from_bytes(v))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
                let mut bytes = alloc::vec::Vec::with_capacity(hint);
                while let Some(byte) = seq.next_element::<u8>()? {
                    bytes.push(byte);
                }
                Ok(IntSet::from_bytes(&bytes))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(IntSetVisitor)
        } else {
            deserializer.deserialize_bytes(IntSetVisitor)
        }
    }
}

/// Module for serializing and deserializing [`IntSet`] as a sorted sequence
/// of members.
pub mod sorted_set {
    use super::*;

    /// Serialize the [`IntSet`] as a sorted sequence of integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails to serialize the sequence.
    pub fn serialize<S>(b: &IntSet, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut ser = serializer.serialize_seq(Some(b.cardinality()))?;
        for i in b {
            ser.serialize_element(&i)?;
        }
        ser.end()
    }

    /// Deserialize an [`IntSet`] from a sorted sequence of integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence is not strictly ascending or if
    /// deserialization fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<IntSet, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IntSetVisitor;

        impl<'de> Visitor<'de> for IntSetVisitor {
            type Value = IntSet;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sorted sequence of integers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = IntSet::new();
                let mut last = None;
                while let Some(i) = seq.next_element::<usize>()? {
                    if let Some(last) = last
                        && last >= i
                    {
                        return Err(de::Error::invalid_value(
                            de::Unexpected::Unsigned(i as u64),
                            &"sorted sequence",
                        ));
                    }
                    last = Some(i);
                    set.insert_bit(i);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(IntSetVisitor)
    }
}

impl Serialize for IntSet {
    /// Serialize the [`IntSet`] as its byte encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bytes::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for IntSet {
    /// Deserialize an [`IntSet`] from its byte encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bytes::deserialize(deserializer)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use ::serde::{Deserialize, Serialize};
    use serde_test::{Configure, Token, assert_tokens};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct SortedSetWrapper {
        #[serde(with = "sorted_set")]
        set: IntSet,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct BytesWrapper {
        #[serde(with = "bytes")]
        set: IntSet,
    }

    fn sample() -> IntSet {
        [0, 3, 8, 10].into_iter().collect()
    }

    // ========================================================================
    // Bytes format tests
    // ========================================================================

    #[test]
    fn test_bytes_readable() {
        assert_tokens(&sample().readable(), &[Token::Str("kKA=")]);
    }

    #[test]
    fn test_bytes_compact() {
        assert_tokens(&sample().compact(), &[Token::Bytes(&[0b1001_0000, 0b1010_0000])]);
    }

    #[test]
    fn test_bytes_empty() {
        assert_tokens(&IntSet::new().readable(), &[Token::Str("")]);
        assert_tokens(&IntSet::new().compact(), &[Token::Bytes(&[])]);
    }

    #[test]
    fn test_bytes_json_roundtrip() {
        let mut set = IntSet::new();
        set.insert_range(60, 70);
        set.insert(1000);

        let json = serde_json::to_string(&set).unwrap();
        let back: IntSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_bytes_ignores_trailing_zero_words() {
        let mut set = sample();
        set.insert(4000);
        set.remove(4000);

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"kKA=\"");
    }

    #[test]
    fn test_bytes_postcard_roundtrip() {
        let set: IntSet = (0..500).step_by(7).collect();

        let encoded = postcard::to_allocvec(&set).unwrap();
        let back: IntSet = postcard::from_bytes(&encoded).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_bytes_accepts_unaligned_length() {
        // three bytes never fill a whole word
        let back: IntSet = serde_json::from_str("\"gAAB\"").unwrap();
        assert_eq!(back.to_string(), "[0 23]");
    }

    #[test]
    fn test_bytes_rejects_invalid_base64() {
        let result: Result<IntSet, _> = serde_json::from_str("\"not base64!\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_bytes_seq_ignores_oversized_hint() {
        use ::serde::de::value::{Error, SeqDeserializer};

        // claims far more elements than it yields
        struct Overstated<I>(I);

        impl<I: Iterator<Item = u8>> Iterator for Overstated<I> {
            type Item = u8;

            fn next(&mut self) -> Option<u8> {
                self.0.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (usize::MAX, Some(usize::MAX))
            }
        }

        let de = SeqDeserializer::<_, Error>::new(Overstated([0x90u8, 0xA0].into_iter()));
        let set = bytes::deserialize(de).unwrap();
        assert_eq!(set, sample());
    }

    #[test]
    fn test_bytes_wrapper() {
        let wrapper = BytesWrapper { set: sample() };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"set":"kKA="}"#);

        let back: BytesWrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }

    // ========================================================================
    // Sorted set format tests
    // ========================================================================

    #[test]
    fn test_sorted_set_tokens() {
        let wrapper = SortedSetWrapper { set: sample() };

        assert_tokens(
            &wrapper,
            &[
                Token::Struct {
                    name: "SortedSetWrapper",
                    len: 1,
                },
                Token::Str("set"),
                Token::Seq { len: Some(4) },
                Token::U64(0),
                Token::U64(3),
                Token::U64(8),
                Token::U64(10),
                Token::SeqEnd,
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_sorted_set_json() {
        let wrapper = SortedSetWrapper {
            set: [2, 13, 42, 4096].into_iter().collect(),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, r#"{"set":[2,13,42,4096]}"#);

        let back: SortedSetWrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wrapper);
    }

    #[test]
    fn test_sorted_set_rejects_unsorted() {
        let result: Result<SortedSetWrapper, _> = serde_json::from_str(r#"{"set":[1,5,3]}"#);
        assert!(result.is_err());

        let result: Result<SortedSetWrapper, _> = serde_json::from_str(r#"{"set":[1,1]}"#);
        assert!(result.is_err());
    }
}
