use std::collections::BTreeSet;

/// Campaign ids whose status change is still waiting on the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignUpdates {
    pending: BTreeSet<String>,
}

impl CampaignUpdates {
    /// Marks `id` as in flight. Returns `false` if it already was, in which
    /// case the caller must not send a second request.
    pub fn begin(&mut self, id: &str) -> bool {
        self.pending.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.pending.remove(id);
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_for_same_campaign_is_refused() {
        let mut updates = CampaignUpdates::default();

        assert!(updates.begin("1"));
        assert!(!updates.begin("1"));
        assert!(updates.begin("2"));

        updates.finish("1");
        assert!(!updates.is_pending("1"));
        assert!(updates.is_pending("2"));
    }
}
