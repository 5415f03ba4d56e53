//! Pure projections from a [`ClientState`] to what the presentation layer
//! renders. Nothing here performs I/O.

use watchlist_core::catalog::CatalogItem;
use watchlist_core::entry::WatchlistEntry;

use crate::state::ClientState;

pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";
const NOT_AVAILABLE: &str = "N/A";

/// Rows to render, or the message to show instead when there are none.
#[derive(Debug, PartialEq)]
pub struct ListView<'a, T> {
    pub rows: &'a [T],
    pub empty_message: Option<String>,
}

/// The active tab's partition of the watchlist.
pub fn watchlist_view(state: &ClientState) -> ListView<'_, WatchlistEntry> {
    let rows = state.watchlist.get(state.active_tab);
    let empty_message = rows
        .is_empty()
        .then(|| format!("Your {} list is empty", state.active_tab));
    ListView {
        rows,
        empty_message,
    }
}

/// Current search results. An empty message is shown only once a search
/// has completed without matches.
pub fn search_view(state: &ClientState) -> ListView<'_, CatalogItem> {
    ListView {
        rows: &state.search_results,
        empty_message: state
            .last_search_empty()
            .then(|| NO_RESULTS_MESSAGE.to_string()),
    }
}

/// Display strings for the details view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub title: String,
    pub image_url: String,
    /// e.g. "TV • 220 eps • Finished Airing"
    pub meta: String,
    pub synopsis: String,
    pub score: String,
    pub rank: String,
    pub popularity: String,
}

pub fn details_view(state: &ClientState) -> Option<DetailsView> {
    let item = state.details.as_ref()?;

    let episodes = item
        .episodes
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    let meta = format!(
        "{} \u{2022} {episodes} eps \u{2022} {}",
        item.kind.as_deref().unwrap_or(NOT_AVAILABLE),
        item.airing_status.as_deref().unwrap_or(NOT_AVAILABLE),
    );

    Some(DetailsView {
        title: item.title.clone(),
        image_url: item.image_url.clone(),
        meta,
        synopsis: item
            .synopsis
            .clone()
            .unwrap_or_else(|| "No synopsis available.".to_string()),
        score: or_na(item.score),
        rank: or_na(item.rank),
        popularity: item
            .popularity
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| format!("#{p}")),
    })
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use watchlist_core::status::WatchStatus;

    use super::*;

    fn item(external_id: i64) -> CatalogItem {
        CatalogItem {
            external_id,
            title: "Naruto".to_string(),
            image_url: "https://cdn/20.jpg".to_string(),
            synopsis: None,
            score: Some(8.0),
            rank: None,
            popularity: Some(9),
            episodes: Some(220),
            kind: Some("TV".to_string()),
            airing_status: Some("Finished Airing".to_string()),
        }
    }

    #[test]
    fn empty_tab_shows_its_name() {
        let state = ClientState {
            active_tab: WatchStatus::Completed,
            ..Default::default()
        };
        let view = watchlist_view(&state);
        assert!(view.rows.is_empty());
        assert_eq!(
            view.empty_message.as_deref(),
            Some("Your completed list is empty")
        );
    }

    #[test]
    fn no_message_before_any_search() {
        let state = ClientState::default();
        let view = search_view(&state);
        assert!(view.rows.is_empty());
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn empty_search_shows_no_results_message() {
        let state = ClientState {
            searched: true,
            ..Default::default()
        };
        assert_eq!(
            search_view(&state).empty_message.as_deref(),
            Some(NO_RESULTS_MESSAGE)
        );
    }

    #[test]
    fn search_rows_are_the_cached_results() {
        let state = ClientState {
            searched: true,
            search_results: vec![item(20)],
            ..Default::default()
        };
        let view = search_view(&state);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.empty_message, None);
    }

    #[test]
    fn details_fill_missing_fields() {
        let state = ClientState {
            details: Some(item(20)),
            ..Default::default()
        };
        let view = details_view(&state).unwrap();
        assert_eq!(view.meta, "TV \u{2022} 220 eps \u{2022} Finished Airing");
        assert_eq!(view.synopsis, "No synopsis available.");
        assert_eq!(view.score, "8");
        assert_eq!(view.rank, "N/A");
        assert_eq!(view.popularity, "#9");
    }

    #[test]
    fn no_details_when_closed() {
        assert_eq!(details_view(&ClientState::default()), None);
    }
}
