//! Version-tagged memoization for derived graph properties.
//!
//! Every entry remembers the graph version it was computed at. An entry is
//! only returned while that version is still current; once the graph moves
//! on the entry is stale and gets overwritten the next time it is computed.
//! Stale entries are never purged eagerly.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Logical names of the properties a graph memoizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Vertex enumeration in insertion order
    Vertices,
    /// The graph with every edge flipped
    ReverseGraph,
    /// Whether any edge lacks an equal-weight counterpart
    IsDirected,
    /// Whether the first vertex's component covers the graph
    IsConnected,
    /// (Strongly) connected component partition
    ConnectedComponents,
    /// Articulation points or strong articulation points
    CutVertices,
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertices => write!(f, "vertices"),
            Self::ReverseGraph => write!(f, "reverse_graph"),
            Self::IsDirected => write!(f, "is_directed"),
            Self::IsConnected => write!(f, "is_connected"),
            Self::ConnectedComponents => write!(f, "connected_components"),
            Self::CutVertices => write!(f, "cut_vertices"),
        }
    }
}

/// A cached value together with the version it belongs to.
struct CacheEntry {
    value: Box<dyn Any>,
    version: u64,
}

/// Read-through cache keyed by a logical name.
///
/// Values of different types can live side by side; a lookup asks for the
/// type it expects and treats a mismatch as a miss.
///
/// # Example
///
/// ```rust
/// use graphscope::graph::VersionedCache;
///
/// let mut cache: VersionedCache<&str> = VersionedCache::new();
/// cache.insert("answer", 42_u32, 1);
///
/// assert_eq!(cache.get::<u32>(&"answer", 1), Some(42));
/// assert_eq!(cache.get::<u32>(&"answer", 2), None); // stale
/// ```
pub struct VersionedCache<K> {
    entries: HashMap<K, CacheEntry>,
}

impl<K> Default for VersionedCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K> VersionedCache<K>
where
    K: Eq + Hash,
{
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the value under `key` if it was computed at `version`.
    pub fn get<V>(&self, key: &K, version: u64) -> Option<V>
    where
        V: Clone + 'static,
    {
        self.entries
            .get(key)
            .filter(|entry| entry.version == version)
            .and_then(|entry| entry.value.downcast_ref::<V>())
            .cloned()
    }

    /// Stores `value` under `key`, tagged with `version`.
    ///
    /// Any previous entry for the key is replaced regardless of its version.
    pub fn insert<V>(&mut self, key: K, value: V, version: u64)
    where
        V: 'static,
    {
        self.entries.insert(
            key,
            CacheEntry {
                value: Box::new(value),
                version,
            },
        );
    }
}

impl<K: fmt::Debug> fmt::Debug for VersionedCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(key, entry)| (key, entry.version)))
            .finish()
    }
}
