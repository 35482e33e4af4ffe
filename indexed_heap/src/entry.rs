use serde::{Deserialize, Serialize};

/// A keyed item stored in an [`IndexedMinHeap`](crate::IndexedMinHeap).
///
/// Only `key` takes part in identity; `priority` decides the position in the
/// heap and `value` is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<K, V, P> {
    pub key: K,
    pub value: V,
    pub priority: P,
}

impl<K, V, P> Entry<K, V, P> {
    pub fn new(key: K, value: V, priority: P) -> Self {
        Self {
            key,
            value,
            priority,
        }
    }
}

impl<K, V, P> From<(K, V, P)> for Entry<K, V, P> {
    fn from((key, value, priority): (K, V, P)) -> Self {
        Self::new(key, value, priority)
    }
}
