use smallvec::SmallVec;

/// Stable handle for a mounted viewer, issued by the admission controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewerId(pub u32);

impl std::fmt::Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Insertion-ordered bounded set of the instances currently allowed to render.
///
/// Admission never fails: when the set is full the oldest member is evicted
/// to make room, and the caller is told who it was so it can stop that loop.
#[derive(Clone, Debug)]
pub struct AdmissionSet<K> {
    members: SmallVec<[K; 4]>,
    capacity: usize,
}

impl<K: Copy + PartialEq> AdmissionSet<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            members: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, key: K) -> bool {
        self.members.contains(&key)
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn oldest(&self) -> Option<K> {
        self.members.first().copied()
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.members.iter().copied()
    }

    /// Admit `key`, returning the member evicted to make room, if any.
    /// Re-activating a current member is a no-op.
    pub fn activate(&mut self, key: K) -> Option<K> {
        if self.contains(key) {
            return None;
        }
        let evicted = if self.members.len() >= self.capacity {
            Some(self.members.remove(0))
        } else {
            None
        };
        self.members.push(key);
        evicted
    }

    /// Returns false when `key` was not a member.
    pub fn deactivate(&mut self, key: K) -> bool {
        match self.members.iter().position(|m| *m == key) {
            Some(i) => {
                self.members.remove(i);
                true
            }
            None => false,
        }
    }
}
