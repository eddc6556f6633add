//! Track construction: the rendered item sequence with boundary clones.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry<T> {
    pub item: T,
    /// Clones are excluded from the original count and from future clone
    /// operations; visually they are indistinguishable from their sources.
    pub is_clone: bool,
}

/// Ordered render sequence: clones of the last `clone_width` items, then the
/// originals, then clones of the first `clone_width` items.
#[derive(Debug, Clone)]
pub struct Track<T> {
    entries: Vec<TrackEntry<T>>,
}

impl<T: Clone> Track<T> {
    /// Builds the track for a fixed item set. Clone sources wrap modularly,
    /// so a clone block wider than the item set cycles through the originals
    /// instead of running past the ends.
    pub fn with_boundary_clones(items: Vec<T>, clone_width: usize) -> Self {
        if items.is_empty() {
            return Self {
                entries: Vec::new(),
            };
        }

        let total = items.len() as i64;
        let mut entries = Vec::with_capacity(items.len() + clone_width * 2);

        for position in 0..clone_width as i64 {
            let source = (total - clone_width as i64 + position).rem_euclid(total) as usize;
            entries.push(TrackEntry {
                item: items[source].clone(),
                is_clone: true,
            });
        }
        for item in &items {
            entries.push(TrackEntry {
                item: item.clone(),
                is_clone: false,
            });
        }
        for position in 0..clone_width {
            let source = position % items.len();
            entries.push(TrackEntry {
                item: items[source].clone(),
                is_clone: true,
            });
        }

        Self { entries }
    }
}

impl<T> Track<T> {
    pub fn entries(&self) -> &[TrackEntry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count of original, non-clone entries.
    pub fn original_len(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_clone).count()
    }
}
