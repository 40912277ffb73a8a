//! Mesh cache for deduplicating generated primitive geometry
//!
//! Owned by the application and injected into primitives through
//! [`PrimitiveResources`](crate::render::PrimitiveResources). Geometry is keyed
//! by the exact parameters it was generated from, so identical primitives
//! share one `Arc<Mesh>` no matter how many threads request it.
//!
//! # Locking
//! The key map sits behind a single `RwLock` that is held only long enough to
//! find or insert the per-key slot. Each slot is a `OnceLock`, so geometry for
//! a key is generated at most once; concurrent requesters for the same key wait
//! on that slot, not on the map. Model creation and drawing never happen while
//! either lock is held.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::foundation::math::Vec3;
use crate::render::primitives::Mesh;

/// Cache key identifying generated geometry by its exact bounds
///
/// Built from the raw bit patterns of the coordinates, so `0.0` and `-0.0`
/// are distinct keys and no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryKey {
    min: [u32; 3],
    max: [u32; 3],
}

impl GeometryKey {
    /// Key for geometry spanning `min` to `max`
    pub fn from_bounds(min: &Vec3, max: &Vec3) -> Self {
        Self {
            min: [min.x.to_bits(), min.y.to_bits(), min.z.to_bits()],
            max: [max.x.to_bits(), max.y.to_bits(), max.z.to_bits()],
        }
    }

    /// Key of the canonical unit cube returned by [`Mesh::unit_cube`]
    pub fn unit_cube() -> Self {
        Self::from_bounds(&Vec3::new(-0.5, -0.5, -0.5), &Vec3::new(0.5, 0.5, 0.5))
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests served from an existing entry
    pub hits: u64,
    /// Requests that generated new geometry
    pub misses: u64,
}

type Slot = Arc<OnceLock<Arc<Mesh>>>;

/// Thread-safe cache of generated geometry
pub struct MeshCache {
    /// Cache storage: key -> lazily filled slot
    entries: RwLock<HashMap<GeometryKey, Slot>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MeshCache {
    /// Create a new empty mesh cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the geometry for `key`, generating it with `build` if absent
    ///
    /// `build` runs at most once per key for the lifetime of the entry, even
    /// under concurrent requests. It runs without the map lock held.
    pub fn get_or_build<F>(&self, key: GeometryKey, build: F) -> Arc<Mesh>
    where
        F: FnOnce() -> Mesh,
    {
        let slot = self.slot(key);

        let mut generated = false;
        let mesh = slot.get_or_init(|| {
            generated = true;
            let mesh = build();
            debug_assert!(mesh.is_well_formed(), "generated mesh has out-of-range indices");
            log::debug!(
                "Generated geometry for {:?}: {} vertices, {} triangles",
                key,
                mesh.vertices.len(),
                mesh.triangle_count()
            );
            Arc::new(mesh)
        });

        if generated {
            self.misses.fetch_add(1, Ordering::Relaxed);
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }

        Arc::clone(mesh)
    }

    /// Geometry for an axis-aligned box spanning `min` to `max`
    pub fn box_geometry(&self, min: &Vec3, max: &Vec3) -> Arc<Mesh> {
        self.get_or_build(GeometryKey::from_bounds(min, max), || {
            Mesh::axis_aligned_box(min, max)
        })
    }

    /// The shared canonical unit cube
    pub fn unit_cube(&self) -> Arc<Mesh> {
        self.get_or_build(GeometryKey::unit_cube(), Mesh::unit_cube)
    }

    /// Get cached geometry without generating it
    pub fn get_cached(&self, key: &GeometryKey) -> Option<Arc<Mesh>> {
        self.read_entries()
            .get(key)
            .and_then(|slot| slot.get().map(Arc::clone))
    }

    /// Check if geometry for `key` has been generated
    pub fn is_cached(&self, key: &GeometryKey) -> bool {
        self.get_cached(key).is_some()
    }

    /// Drop the entry for `key`
    ///
    /// Meshes already handed out stay alive through their `Arc`. Returns true
    /// if an entry was removed.
    pub fn evict(&self, key: &GeometryKey) -> bool {
        self.write_entries().remove(key).is_some()
    }

    /// Clear all cached geometry
    pub fn clear(&self) {
        self.write_entries().clear();
    }

    /// Get the number of generated entries
    pub fn len(&self) -> usize {
        self.read_entries()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current hit/miss counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Find or insert the slot for `key`, releasing the map lock before returning
    fn slot(&self, key: GeometryKey) -> Slot {
        if let Some(slot) = self.read_entries().get(&key) {
            return Arc::clone(slot);
        }
        Arc::clone(self.write_entries().entry(key).or_default())
    }

    // A panic while holding the lock cannot leave the map half-updated, so
    // poisoning is ignored.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<GeometryKey, Slot>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<GeometryKey, Slot>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MeshCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshCache")
            .field("len", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
