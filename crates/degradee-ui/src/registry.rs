/// Ordered, id-keyed collection of shared handles.
///
/// Ids are never reused, so a stale id removes nothing.
#[derive(Debug)]
pub(crate) struct Registry<H> {
    entries: Vec<(u64, H)>,
    next_id: u64,
}

impl<H: Clone> Registry<H> {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new(), next_id: 0 }
    }

    pub(crate) fn insert(&mut self, handle: H) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, handle));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != id);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &H> {
        self.entries.iter().map(|(_, h)| h)
    }

    /// Clones the handles in registration order, detached from the registry.
    pub(crate) fn snapshot(&self) -> Vec<H> {
        self.iter().cloned().collect()
    }
}

impl<H: Clone> Default for Registry<H> {
    fn default() -> Self {
        Self::new()
    }
}
