use watchlist_core::entry::WatchlistEntry;
use watchlist_core::status::WatchStatus;
use watchlist_core::types::DbId;

/// The watchlist split into one sequence per status.
///
/// Always rebuilt wholesale from a full listing; never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub watching: Vec<WatchlistEntry>,
    pub planned: Vec<WatchlistEntry>,
    pub completed: Vec<WatchlistEntry>,
}

impl Partition {
    /// Split `entries` by status, keeping their relative order.
    pub fn from_entries(entries: Vec<WatchlistEntry>) -> Self {
        let mut partition = Self::default();
        for entry in entries {
            match entry.status {
                WatchStatus::Watching => partition.watching.push(entry),
                WatchStatus::Planned => partition.planned.push(entry),
                WatchStatus::Completed => partition.completed.push(entry),
            }
        }
        partition
    }

    pub fn get(&self, status: WatchStatus) -> &[WatchlistEntry] {
        match status {
            WatchStatus::Watching => &self.watching,
            WatchStatus::Planned => &self.planned,
            WatchStatus::Completed => &self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.watching.len() + self.planned.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find an entry by id in any partition.
    pub fn find(&self, id: DbId) -> Option<&WatchlistEntry> {
        WatchStatus::ALL
            .into_iter()
            .flat_map(|status| self.get(status))
            .find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::entry::AddEntryInput;
    use watchlist_core::service::WatchlistService;
    use watchlist_core::store::InMemoryStore;

    async fn listing(items: &[(i64, &str, &str)]) -> Vec<WatchlistEntry> {
        let service = WatchlistService::new(std::sync::Arc::new(InMemoryStore::new()));
        for (external_id, title, status) in items {
            service
                .add_entry(AddEntryInput {
                    external_id: Some(*external_id),
                    title: Some(title.to_string()),
                    image_url: Some(format!("https://x/{external_id}.png")),
                    status: Some(status.to_string()),
                })
                .await
                .unwrap();
        }
        service.list_entries(None).await.unwrap()
    }

    #[tokio::test]
    async fn splits_by_status_and_keeps_order() {
        let entries = listing(&[
            (1, "Naruto", "watching"),
            (2, "Akira", "completed"),
            (3, "Bleach", "watching"),
            (4, "Monster", "planned"),
        ])
        .await;

        let partition = Partition::from_entries(entries);

        let watching: Vec<_> = partition.watching.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(watching, ["Bleach", "Naruto"]);
        assert_eq!(partition.planned.len(), 1);
        assert_eq!(partition.completed[0].title, "Akira");
        assert_eq!(partition.len(), 4);
    }

    #[tokio::test]
    async fn union_of_partitions_is_the_full_listing() {
        let entries = listing(&[(1, "A", "planned"), (2, "B", "completed")]).await;
        let partition = Partition::from_entries(entries.clone());

        let mut union: Vec<_> = WatchStatus::ALL
            .into_iter()
            .flat_map(|s| partition.get(s).to_vec())
            .collect();
        union.sort_by_key(|e| e.id);
        let mut expected = entries;
        expected.sort_by_key(|e| e.id);
        assert_eq!(union, expected);
    }

    #[test]
    fn empty_listing_gives_empty_partition() {
        let partition = Partition::from_entries(Vec::new());
        assert!(partition.is_empty());
        assert!(partition.find(1).is_none());
    }
}
