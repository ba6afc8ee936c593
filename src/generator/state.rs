//! Mutable worker state guarded by the worker lock

/// Bookkeeping for one worker, only touched while the lock is held
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerState {
    /// Tick of the last emitted id, -1 before the first one
    pub last_tick: i64,
    /// Counter within `last_tick`
    pub sequence: u16,
    /// Toggled on every tolerated backward jump
    pub clash: bool,
    /// Greatest tick ever observed
    pub high_water_tick: i64,
}

impl WorkerState {
    /// Tick value meaning "no id produced yet"
    pub const UNSET: i64 = -1;

    pub const fn new() -> Self {
        Self {
            last_tick: Self::UNSET,
            sequence: 0,
            clash: false,
            high_water_tick: Self::UNSET,
        }
    }

    /// Record the fields of the id about to be emitted
    #[inline(always)]
    pub fn commit(&mut self, now: i64, sequence: u16, clash: bool) {
        self.last_tick = now;
        self.sequence = sequence;
        self.clash = clash;
        if self.high_water_tick < now {
            self.high_water_tick = now;
        }
    }
}

impl Default for WorkerState {
    fn default() -> Self {
        Self::new()
    }
}
