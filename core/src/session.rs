/// Everything one interactive session accumulates, threaded explicitly
/// through the update loop instead of living in ambient state.
///
/// The update set keeps one entry per device: a device updated twice keeps
/// its first-insertion position and its last address. The devices-updated
/// counter, by contrast, counts applied updates, so a double update reports
/// as 2 in the summary.
#[derive(Debug, Default)]
pub struct SessionReport {
    updates: Vec<(String, String)>,
    invalid_attempts: Vec<String>,
    devices_updated: usize,
}

impl SessionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_update(&mut self, name: &str, address: &str) {
        match self.updates.iter_mut().find(|(n, _)| n == name) {
            Some((_, current)) => *current = address.to_string(),
            None => self.updates.push((name.to_string(), address.to_string())),
        }
        self.devices_updated += 1;
    }

    /// Appends a rejected address. Duplicates are kept; the list is the
    /// session's chronological record.
    pub fn record_invalid(&mut self, address: &str) {
        self.invalid_attempts.push(address.to_string());
    }

    pub fn updates(&self) -> &[(String, String)] {
        &self.updates
    }

    pub fn invalid_attempts(&self) -> &[String] {
        &self.invalid_attempts
    }

    pub fn updated_count(&self) -> usize {
        self.devices_updated
    }

    /// Always equal to `invalid_attempts().len()`; the summary and the
    /// written list can never disagree.
    pub fn invalid_count(&self) -> usize {
        self.invalid_attempts.len()
    }
}
