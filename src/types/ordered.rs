//! Insertion-ordered, string-keyed maps.
//!
//! Iteration order carries meaning in a manifest: `symbols` and `mapping`
//! follow priority order, `bundles` follow alphabetical order. `IndexMap`
//! serializes in insertion order and deserializes in document order.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A map that iterates in insertion order.
///
/// Equality ignores order; compare keys or serialized bytes when order
/// matters.
pub type OrderedMap<V> = IndexMap<String, V>;

struct UniqueKeysVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeysVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with unique string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if map.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key `{key}`")));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Deserialize an [`OrderedMap`], rejecting repeated keys instead of
/// letting the last one win.
pub fn deserialize_unique_keys<'de, D, V>(deserializer: D) -> Result<OrderedMap<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(UniqueKeysVisitor(PhantomData))
}
