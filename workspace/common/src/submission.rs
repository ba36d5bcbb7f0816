/// Identifies one submission of a form, ordered by submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Keeps a form's result container showing its newest submission.
///
/// Requests are never cancelled. Each response is checked with
/// [`should_apply`](Self::should_apply) before it is rendered, and a response
/// that belongs to an older submission than the one already on screen is
/// dropped.
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    issued: u64,
    applied: Option<SubmissionTicket>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new submission.
    pub fn begin(&mut self) -> SubmissionTicket {
        self.issued += 1;
        SubmissionTicket(self.issued)
    }

    /// Whether the response for `ticket` may replace what is displayed.
    /// Accepting a ticket marks it as displayed.
    pub fn should_apply(&mut self, ticket: SubmissionTicket) -> bool {
        if self.applied.is_some_and(|applied| applied >= ticket) {
            return false;
        }
        self.applied = Some(ticket);
        true
    }

    /// Number of submissions not yet superseded or displayed.
    pub fn pending(&self) -> u64 {
        self.issued - self.applied.map_or(0, SubmissionTicket::sequence)
    }
}
