use crate::error::TransportError;

/// What the page is waiting on, if anything.
///
/// `Failed` keeps the last error around for the operator's console; the
/// page itself renders nothing for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Submitting,
    Failed(TransportError),
}

impl RequestState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, RequestState::Submitting)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// A load never interrupts an outstanding save or delete.
    pub fn begin_load(&mut self) {
        if !self.is_submitting() {
            *self = RequestState::Loading;
        }
    }

    /// Returns false if a save or delete is already outstanding.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = RequestState::Submitting;
        true
    }

    pub fn finish(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn fail(&mut self, error: TransportError) {
        *self = RequestState::Failed(error);
    }

    pub fn load_succeeded(&mut self) {
        if self.is_loading() {
            self.finish();
        }
    }

    /// A failed load is recorded unless a save or delete is still running.
    pub fn load_failed(&mut self, error: TransportError) {
        if !self.is_submitting() {
            self.fail(error);
        }
    }
}

/// Tags every list load with a generation so that only the newest one is
/// applied. Leaving the page bumps it too, orphaning anything in flight.
#[derive(Debug, Default)]
pub struct LoadGuard {
    generation: u64,
}

impl LoadGuard {
    /// Starts a load and returns the generation its result must carry.
    pub fn begin(&mut self, request: &mut RequestState) -> u64 {
        self.generation += 1;
        request.begin_load();
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    pub fn current(&self) -> u64 {
        self.generation
    }

    pub fn unmount(&mut self, request: &mut RequestState) {
        self.generation += 1;
        if request.is_loading() {
            request.finish();
        }
    }
}
