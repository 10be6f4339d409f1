/// Suppresses a notification identical to the last one delivered.
#[derive(Debug, Default)]
pub struct NotificationGate {
    last: Option<String>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_send(&self, candidate: &str) -> bool {
        self.last.as_deref() != Some(candidate)
    }

    /// Call only after the send went through.
    pub fn record_sent(&mut self, candidate: String) {
        self.last = Some(candidate);
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}
