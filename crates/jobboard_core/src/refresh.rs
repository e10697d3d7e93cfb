#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPhase {
    #[default]
    Idle,
    Triggering,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Backend accepted the scrape; carries its message (possibly empty).
    Acknowledged(String),
    Failed(String),
}

/// One-shot remote scrape. Only one may be in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefreshTrigger {
    phase: RefreshPhase,
    last_outcome: Option<RefreshOutcome>,
}

impl RefreshTrigger {
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn last_outcome(&self) -> Option<&RefreshOutcome> {
        self.last_outcome.as_ref()
    }

    /// Idle -> Triggering. Returns `false` (and changes nothing) while a
    /// scrape is already running.
    pub(crate) fn begin(&mut self) -> bool {
        if self.phase == RefreshPhase::Triggering {
            return false;
        }
        self.phase = RefreshPhase::Triggering;
        true
    }

    /// Triggering -> Idle with the recorded outcome. A completion that arrives
    /// while idle is ignored.
    pub(crate) fn finish(&mut self, outcome: RefreshOutcome) -> bool {
        if self.phase != RefreshPhase::Triggering {
            return false;
        }
        self.phase = RefreshPhase::Idle;
        self.last_outcome = Some(outcome);
        true
    }
}
