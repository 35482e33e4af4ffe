use super::IndexedMinHeap;
use crate::Entry;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::hash::Hash;

// only the entry array is written; the locator is rebuilt on the way back in
impl<K: Serialize, V: Serialize, P: Serialize> Serialize for IndexedMinHeap<K, V, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de, K, V, P> Deserialize<'de> for IndexedMinHeap<K, V, P>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de>,
    P: Deserialize<'de> + PartialOrd,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Entry<K, V, P>>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(de::Error::custom)
    }
}
