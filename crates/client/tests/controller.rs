//! Controller tests over the in-process watchlist service and a scripted
//! catalog.

use std::sync::Arc;

use async_trait::async_trait;
use watchlist_client::controller::{ADDED_MESSAGE, DELETE_FAILED_MESSAGE, DETAILS_FAILED_MESSAGE};
use watchlist_client::view::{search_view, watchlist_view, NO_RESULTS_MESSAGE};
use watchlist_client::{Action, ClientState, Controller, Notice, NoticeKind, WatchlistApi};
use watchlist_core::catalog::{CatalogClient, CatalogItem};
use watchlist_core::error::CoreError;
use watchlist_core::service::WatchlistService;
use watchlist_core::status::WatchStatus;
use watchlist_core::store::InMemoryStore;
use watchlist_core::types::ExternalId;

fn item(external_id: ExternalId, title: &str) -> CatalogItem {
    CatalogItem {
        external_id,
        title: title.to_string(),
        image_url: format!("https://cdn/{external_id}.jpg"),
        synopsis: None,
        score: None,
        rank: None,
        popularity: None,
        episodes: None,
        kind: None,
        airing_status: None,
    }
}

/// Returns every known item whose title contains the query.
struct FakeCatalog {
    items: Vec<CatalogItem>,
    down: bool,
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<CatalogItem>, CoreError> {
        if self.down {
            return Err(CoreError::ServiceUnavailable("catalog down".into()));
        }
        Ok(self
            .items
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&query.to_lowercase()))
            .cloned()
            .collect())
    }

    async fn get_details(&self, external_id: ExternalId) -> Result<CatalogItem, CoreError> {
        if self.down {
            return Err(CoreError::ServiceUnavailable("catalog down".into()));
        }
        self.items
            .iter()
            .find(|i| i.external_id == external_id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "CatalogItem",
                id: external_id,
            })
    }
}

fn catalog() -> FakeCatalog {
    FakeCatalog {
        items: vec![
            item(20, "Naruto"),
            item(1735, "Naruto: Shippuden"),
            item(269, "Bleach"),
        ],
        down: false,
    }
}

struct Harness {
    controller: Controller,
    service: WatchlistService,
}

fn harness_with(catalog: FakeCatalog) -> Harness {
    let service = WatchlistService::new(Arc::new(InMemoryStore::new()));
    let api: Arc<dyn WatchlistApi> = Arc::new(service.clone());
    Harness {
        controller: Controller::new(api, Arc::new(catalog)),
        service,
    }
}

fn harness() -> Harness {
    harness_with(catalog())
}

impl Harness {
    async fn run(&self, state: ClientState, actions: Vec<Action>) -> ClientState {
        let mut state = state;
        for action in actions {
            state = self.controller.dispatch(&state, action).await;
        }
        state
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_replaces_previous_results() {
    let h = harness();
    let state = h
        .run(ClientState::default(), vec![Action::Search("naruto".into())])
        .await;
    assert_eq!(state.search_results.len(), 2);

    let state = h.run(state, vec![Action::Search("bleach".into())]).await;
    assert_eq!(state.search_results, vec![item(269, "Bleach")]);
}

#[tokio::test]
async fn blank_search_is_a_no_op() {
    let h = harness();
    let before = h
        .run(ClientState::default(), vec![Action::Search("naruto".into())])
        .await;
    let after = h.run(before.clone(), vec![Action::Search("   ".into())]).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn search_without_matches_shows_no_results() {
    let h = harness();
    let state = h
        .run(ClientState::default(), vec![Action::Search("zzz".into())])
        .await;
    assert_eq!(
        search_view(&state).empty_message.as_deref(),
        Some(NO_RESULTS_MESSAGE)
    );

    let state = h.run(state, vec![Action::ClearSearch]).await;
    assert_eq!(search_view(&state).empty_message, None);
}

#[tokio::test]
async fn catalog_outage_sets_error_notice_and_keeps_results() {
    let h = harness_with(FakeCatalog {
        items: Vec::new(),
        down: true,
    });
    let before = ClientState {
        search_results: vec![item(20, "Naruto")],
        searched: true,
        ..Default::default()
    };

    let after = h.run(before.clone(), vec![Action::Search("x".into())]).await;

    assert_eq!(after.search_results, before.search_results);
    assert_eq!(after.notice.map(|n| n.kind), Some(NoticeKind::Error));
}

// ---------------------------------------------------------------------------
// Add / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn add_persists_refreshes_and_notifies() {
    let h = harness();
    let state = h
        .run(
            ClientState::default(),
            vec![
                Action::Load,
                Action::Search("naruto".into()),
                Action::Add {
                    external_id: 20,
                    status: WatchStatus::Watching,
                },
            ],
        )
        .await;

    assert_eq!(state.notice, Some(Notice::info(ADDED_MESSAGE)));
    let view = watchlist_view(&state);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].external_id, 20);
    assert_eq!(view.rows[0].status, WatchStatus::Watching);
    assert_eq!(h.service.list_entries(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_of_unknown_item_is_a_no_op() {
    let h = harness();
    let before = h
        .run(ClientState::default(), vec![Action::Search("bleach".into())])
        .await;
    let after = h
        .run(
            before.clone(),
            vec![Action::Add {
                external_id: 20,
                status: WatchStatus::Planned,
            }],
        )
        .await;

    assert_eq!(after, before);
    assert!(h.service.list_entries(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_add_surfaces_conflict_message() {
    let h = harness();
    let add = Action::Add {
        external_id: 20,
        status: WatchStatus::Planned,
    };
    let state = h
        .run(
            ClientState::default(),
            vec![Action::Search("naruto".into()), add.clone(), Action::DismissNotice],
        )
        .await;
    let state = h.run(state, vec![add]).await;

    let notice = state.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.contains("already in the watchlist"));
    assert_eq!(state.watchlist.len(), 1);
}

#[tokio::test]
async fn update_status_moves_entry_between_tabs() {
    let h = harness();
    let state = h
        .run(
            ClientState::default(),
            vec![
                Action::Search("naruto".into()),
                Action::Add {
                    external_id: 20,
                    status: WatchStatus::Planned,
                },
            ],
        )
        .await;
    let id = state.watchlist.planned[0].id;

    let state = h
        .run(
            state,
            vec![
                Action::UpdateStatus {
                    id,
                    status: "completed".into(),
                },
                Action::SelectTab(WatchStatus::Completed),
            ],
        )
        .await;

    assert!(state.watchlist.planned.is_empty());
    assert_eq!(watchlist_view(&state).rows[0].id, id);
}

#[tokio::test]
async fn invalid_status_update_leaves_state_unchanged() {
    let h = harness();
    let state = h
        .run(
            ClientState::default(),
            vec![
                Action::Search("bleach".into()),
                Action::Add {
                    external_id: 269,
                    status: WatchStatus::Watching,
                },
                Action::DismissNotice,
            ],
        )
        .await;
    let id = state.watchlist.watching[0].id;

    let after = h
        .run(
            state.clone(),
            vec![Action::UpdateStatus {
                id,
                status: "dropped".into(),
            }],
        )
        .await;

    assert_eq!(after.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    assert_eq!(after.watchlist, state.watchlist);
    assert_eq!(
        h.service.get_entry(id).await.unwrap().status,
        WatchStatus::Watching
    );
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let h = harness();
    let state = h
        .run(
            ClientState::default(),
            vec![
                Action::Search("bleach".into()),
                Action::Add {
                    external_id: 269,
                    status: WatchStatus::Watching,
                },
            ],
        )
        .await;
    let id = state.watchlist.watching[0].id;

    let state = h
        .run(state, vec![Action::RequestDelete(id), Action::CancelDelete])
        .await;
    assert_eq!(state.pending_delete, None);
    assert_eq!(state.watchlist.len(), 1);

    let state = h
        .run(state, vec![Action::RequestDelete(id), Action::ConfirmDelete])
        .await;
    assert_eq!(state.pending_delete, None);
    assert!(state.watchlist.is_empty());
    assert_eq!(
        watchlist_view(&state).empty_message.as_deref(),
        Some("Your watching list is empty")
    );
}

#[tokio::test]
async fn deleting_a_vanished_entry_reports_failure() {
    let h = harness();
    let state = h
        .run(
            ClientState::default(),
            vec![Action::RequestDelete(999), Action::ConfirmDelete],
        )
        .await;

    assert_eq!(state.notice, Some(Notice::error(DELETE_FAILED_MESSAGE)));
    assert_eq!(state.pending_delete, Some(999));
}

#[tokio::test]
async fn confirm_without_pending_delete_does_nothing() {
    let h = harness();
    let state = h
        .run(ClientState::default(), vec![Action::ConfirmDelete])
        .await;
    assert_eq!(state, ClientState::default());
}

// ---------------------------------------------------------------------------
// Details / tabs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn details_open_and_close() {
    let h = harness();
    let state = h
        .run(ClientState::default(), vec![Action::ShowDetails(269)])
        .await;
    assert_eq!(state.details.as_ref().map(|d| d.title.as_str()), Some("Bleach"));

    let state = h.run(state, vec![Action::CloseDetails]).await;
    assert_eq!(state.details, None);
}

#[tokio::test]
async fn details_failure_sets_error_notice() {
    let h = harness();
    let state = h
        .run(ClientState::default(), vec![Action::ShowDetails(1)])
        .await;

    assert_eq!(state.details, None);
    assert_eq!(state.notice, Some(Notice::error(DETAILS_FAILED_MESSAGE)));
}

#[tokio::test]
async fn select_tab_does_no_io() {
    let h = harness_with(FakeCatalog {
        items: Vec::new(),
        down: true,
    });
    let state = h
        .run(
            ClientState::default(),
            vec![Action::SelectTab(WatchStatus::Planned)],
        )
        .await;
    assert_eq!(state.active_tab, WatchStatus::Planned);
    assert_eq!(state.notice, None);
}
