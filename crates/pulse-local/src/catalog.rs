use super::*;

use std::cmp::Ordering;

/// Process-wide collection of discovered levels, split into the local and
/// the workshop-subscribed subsets.
pub struct LevelCatalog {
    pub local: Vec<Rc<LevelRecord>>,
    pub remote: Vec<Rc<LevelRecord>>,
    loading: Cell<bool>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelCatalog {
    pub fn new() -> Self {
        Self {
            local: Vec::new(),
            remote: Vec::new(),
            loading: Cell::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Returns false when a discovery pass is already running.
    pub(crate) fn try_begin_loading(&self) -> bool {
        if self.loading.get() {
            return false;
        }
        self.loading.set(true);
        true
    }

    pub(crate) fn finish_loading(&self) {
        self.loading.set(false);
    }

    /// Lookup by identifier, the remote collection taking precedence.
    pub fn get(&self, id: &str) -> Option<Rc<LevelRecord>> {
        self.get_remote(id).or_else(|| self.get_local(id))
    }

    pub fn get_local(&self, id: &str) -> Option<Rc<LevelRecord>> {
        find_record(&self.local, id)
    }

    pub fn get_remote(&self, id: &str) -> Option<Rc<LevelRecord>> {
        find_record(&self.remote, id)
    }

    /// Union-style count used for reporting.
    pub fn total_count(&self) -> usize {
        self.local.len() + self.remote.len()
    }

    pub fn sort_local(&mut self, sort: LevelSort, descending: bool) {
        sort_records(&mut self.local, sort, descending);
    }

    pub fn sort_remote(&mut self, sort: LevelSort, descending: bool) {
        sort_records(&mut self.remote, sort, descending);
    }

    pub fn dedup_local(&mut self) {
        dedup_records(&mut self.local);
    }

    pub fn dedup_remote(&mut self) {
        dedup_records(&mut self.remote);
    }

    pub fn reset(&mut self) {
        self.local.clear();
        self.remote.clear();
    }
}

fn find_record(records: &[Rc<LevelRecord>], id: &str) -> Option<Rc<LevelRecord>> {
    records.iter().find(|level| level.matches_id(id)).cloned()
}

pub fn sort_records(records: &mut [Rc<LevelRecord>], sort: LevelSort, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare(sort, a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare(sort: LevelSort, a: &LevelRecord, b: &LevelRecord) -> Ordering {
    match sort {
        LevelSort::Title => cmp_str(&a.meta.song_title, &b.meta.song_title),
        LevelSort::Artist => cmp_str(&a.meta.artist, &b.meta.artist),
        LevelSort::Creator => cmp_str(&a.meta.creator, &b.meta.creator),
        LevelSort::Folder => cmp_str(a.folder_name(), b.folder_name()),
        LevelSort::Difficulty => a.meta.difficulty.cmp(&b.meta.difficulty),
    }
}

fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Drop records whose identifier was already seen, keeping the first occurrence.
pub fn dedup_records(records: &mut Vec<Rc<LevelRecord>>) {
    let mut seen = HashSet::new();
    records.retain(|level| seen.insert(level.id().to_string()));
}
