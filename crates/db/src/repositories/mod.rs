pub mod watchlist_entry_repo;

pub use watchlist_entry_repo::WatchlistEntryRepo;
