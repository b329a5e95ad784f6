//! Identity handle tables.
//!
//! Handles are dense integers assigned from 0, once per distinct object
//! identity on the write side and once per decode event on the read side.
//! Both tables live exactly as long as the writer/reader owning them.

/// Identity-keyed table assigning dense handles to objects as they are
/// written.
///
/// An open hash over identities (not values): `spine` holds one chain head
/// per bucket, `next` links entry indices into chains, and `objs` stores the
/// identities densely, indexed by handle.
#[derive(Debug)]
pub struct WriteHandleTable {
    size: usize,
    threshold: usize,
    load_factor: f32,
    spine: Vec<i32>,
    next: Vec<i32>,
    objs: Vec<usize>,
}

impl WriteHandleTable {
    pub fn new(init_cap: usize, load_factor: f32) -> Self {
        Self {
            size: 0,
            threshold: (init_cap as f32 * load_factor) as usize,
            load_factor,
            spine: vec![-1; init_cap],
            next: vec![0; init_cap],
            objs: vec![0; init_cap],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the handle assigned when `identity` was first seen, or `None`
    /// on first sight, in which case the next dense handle is recorded for
    /// it.
    pub fn lookup(&mut self, identity: usize) -> Option<i32> {
        let idx = Self::hash(identity) % self.spine.len();

        if self.size == 0 {
            self.assign(identity, idx);
            return None;
        }

        let mut i = self.spine[idx];
        while i >= 0 {
            if self.objs[i as usize] == identity {
                return Some(i);
            }
            i = self.next[i as usize];
        }

        self.assign(identity, idx);
        None
    }

    fn hash(identity: usize) -> usize {
        identity & 0x7FFF_FFFF
    }

    fn assign(&mut self, identity: usize, mut idx: usize) {
        if self.size >= self.next.len() {
            self.grow_entries();
        }
        if self.size >= self.threshold {
            self.grow_spine();
            idx = Self::hash(identity) % self.spine.len();
        }

        self.insert(identity, self.size as i32, idx);

        self.size += 1;
    }

    fn grow_entries(&mut self) {
        let new_len = (self.next.len() << 1) + 1;
        self.objs.resize(new_len, 0);
        self.next.resize(new_len, 0);
    }

    fn grow_spine(&mut self) {
        let new_len = (self.spine.len() << 1) + 1;
        self.threshold = (new_len as f32 * self.load_factor) as usize;

        self.spine.clear();
        self.spine.resize(new_len, -1);

        /* Rehash every assigned entry into the new spine. */
        for handle in 0..self.size {
            let identity = self.objs[handle];
            let idx = Self::hash(identity) % self.spine.len();
            self.insert(identity, handle as i32, idx);
        }
    }

    fn insert(&mut self, identity: usize, handle: i32, idx: usize) {
        self.objs[handle as usize] = identity;
        self.next[handle as usize] = self.spine[idx];
        self.spine[idx] = handle;
    }
}

/// Append-only table assigning sequential handles to objects in decode
/// order. No removal.
#[derive(Debug)]
pub struct ReadHandleTable<T> {
    handles: Vec<T>,
}

impl<T> ReadHandleTable<T> {
    pub fn new() -> Self {
        Self { handles: vec![] }
    }

    pub fn assign(&mut self, obj: T) -> i32 {
        let handle = self.handles.len() as i32;
        self.handles.push(obj);
        handle
    }

    pub fn lookup(&self, handle: i32) -> Option<&T> {
        self.handles.get(handle as usize)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

impl<T> Default for ReadHandleTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
