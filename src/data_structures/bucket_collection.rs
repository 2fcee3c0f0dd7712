use std::collections::BTreeMap;

/// Sparse, ordered partition of vertices into buckets
///
/// Buckets are kept in a `BTreeMap` keyed by bucket index so the smallest
/// non-empty index is always the first key. Every vertex owns a back-reference
/// `(bucket, position)` into the bucket's member vector, which makes removal a
/// direct `swap_remove` instead of a scan.
///
/// A bucket whose last member leaves is deleted, so every key present in the
/// map refers to a non-empty bucket.
#[derive(Debug, Clone, Default)]
pub struct BucketCollection {
    buckets: BTreeMap<usize, Vec<usize>>,
    slots: Vec<Option<Slot>>,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    bucket: usize,
    position: usize,
}

impl BucketCollection {
    /// Creates an empty collection able to hold vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        BucketCollection {
            buckets: BTreeMap::new(),
            slots: vec![None; vertex_count],
            len: 0,
        }
    }

    /// True if no vertex is in any bucket
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of vertices held across all buckets
    pub fn len(&self) -> usize {
        self.len
    }

    /// Smallest index of a non-empty bucket
    pub fn min_index(&self) -> Option<usize> {
        self.buckets.keys().next().copied()
    }

    /// True if bucket `index` has at least one member
    pub fn contains_bucket(&self, index: usize) -> bool {
        self.buckets.contains_key(&index)
    }

    /// The bucket currently holding `vertex`
    pub fn bucket_of(&self, vertex: usize) -> Option<usize> {
        self.slots.get(vertex).copied().flatten().map(|slot| slot.bucket)
    }

    /// Members of bucket `index` in insertion order, modulo removals
    pub fn members(&self, index: usize) -> &[usize] {
        self.buckets.get(&index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(index, members)` in increasing index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.buckets.iter().map(|(&index, members)| (index, members.as_slice()))
    }

    /// Puts `vertex` into bucket `index`
    ///
    /// Inserting into the bucket that already holds the vertex is a no-op. If the
    /// vertex sits in a different bucket it is moved, so a vertex is never in
    /// two buckets at once.
    pub fn insert(&mut self, vertex: usize, index: usize) {
        match self.bucket_of(vertex) {
            Some(current) if current == index => return,
            Some(_) => {
                self.remove(vertex);
            }
            None => {}
        }

        let members = self.buckets.entry(index).or_default();
        members.push(vertex);
        self.slots[vertex] = Some(Slot {
            bucket: index,
            position: members.len() - 1,
        });
        self.len += 1;
    }

    /// Detaches `vertex` from its bucket and returns the bucket index
    ///
    /// A vertex that is in no bucket is left alone and `None` is returned.
    pub fn remove(&mut self, vertex: usize) -> Option<usize> {
        let slot = self.slots.get_mut(vertex)?.take()?;

        if let Some(members) = self.buckets.get_mut(&slot.bucket) {
            members.swap_remove(slot.position);
            if let Some(&moved) = members.get(slot.position) {
                if let Some(moved_slot) = self.slots[moved].as_mut() {
                    moved_slot.position = slot.position;
                }
            }
            if members.is_empty() {
                self.buckets.remove(&slot.bucket);
            }
        }

        self.len -= 1;
        Some(slot.bucket)
    }

    /// Empties bucket `index` and returns its former members
    ///
    /// After this call the bucket is absent; later inserts into the same index
    /// start a fresh bucket.
    pub fn take(&mut self, index: usize) -> Vec<usize> {
        let members = self.buckets.remove(&index).unwrap_or_default();
        for &vertex in &members {
            self.slots[vertex] = None;
        }
        self.len -= members.len();
        members
    }
}
