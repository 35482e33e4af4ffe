mod entry;
mod error;
mod indexed_min_heap;
mod locator;
mod tree;

pub use entry::Entry;
pub use error::HeapError;
pub use indexed_min_heap::IndexedMinHeap;
