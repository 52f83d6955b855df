/// Generation-stamped guard for a self-rescheduling frame callback.
///
/// Every start hands out a fresh generation; a queued tick from an earlier
/// run sees a stale generation and does nothing, so stop-then-start before
/// the next refresh never leaves two loops alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopGate {
    generation: u64,
    running: bool,
}

impl LoopGate {
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[allow(dead_code)] // inspected by host tests
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the new generation, or `None` if already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.running {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        Some(self.generation)
    }

    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn admits(&self, generation: u64) -> bool {
        self.running && self.generation == generation
    }
}
