use crate::core::{AdmissionSet, ViewerId};
use crate::viewer::Viewer;
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedAdmission = Rc<RefCell<AdmissionController>>;

/// Page-wide cap on concurrently animating viewers.
///
/// Owned by the page bootstrap and handed to every viewer it mounts; tests
/// and embedders can run several independent controllers side by side.
pub struct AdmissionController {
    active: AdmissionSet<ViewerId>,
    registry: FnvHashMap<ViewerId, Weak<RefCell<Viewer>>>,
    next_id: u32,
}

impl AdmissionController {
    pub fn new(max_active: usize) -> Self {
        Self {
            active: AdmissionSet::new(max_active),
            registry: FnvHashMap::default(),
            next_id: 1,
        }
    }

    pub fn shared(max_active: usize) -> SharedAdmission {
        Rc::new(RefCell::new(Self::new(max_active)))
    }

    pub fn register(&mut self, viewer: Weak<RefCell<Viewer>>) -> ViewerId {
        let id = ViewerId(self.next_id);
        self.next_id += 1;
        self.registry.insert(id, viewer);
        id
    }

    pub fn unregister(&mut self, id: ViewerId) {
        self.active.deactivate(id);
        self.registry.remove(&id);
    }

    /// Admit `id`; returns the viewer evicted to make room so the caller can
    /// stop it once this borrow is released.
    pub fn activate(&mut self, id: ViewerId) -> Option<Rc<RefCell<Viewer>>> {
        let evicted = self.active.activate(id)?;
        log::debug!("[admission] {} evicted by {}", evicted, id);
        self.registry.get(&evicted).and_then(Weak::upgrade)
    }

    pub fn deactivate(&mut self, id: ViewerId) -> bool {
        self.active.deactivate(id)
    }

    pub fn capacity(&self) -> usize {
        self.active.capacity()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
