//! `GET /` — the inbox page, rendered server-side from an [`InboxController`].
//!
//! Every interaction is a plain link or form submission:
//! `?email=` submits a search, `&selected=<id>` selects a message and
//! `&find=1` runs the code lookup on it.
//!
//! Nothing is kept between requests, so each click fetches the listing again.
//! If the mailbox changed in the meantime and the selected ID is no longer on
//! the first page, the page renders without a selection.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use inbox_core::InboxController;
use serde::Deserialize;

use crate::{proxy::ProxySource, render, routes::Upstream};

/// Query parameters understood by the page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub email: Option<String>,
    pub selected: Option<String>,
    pub find: Option<String>,
}

/// Replay the interactions encoded in `params` on a fresh controller.
pub async fn build_controller(upstream: &Upstream, params: &PageParams) -> InboxController {
    let mut controller = InboxController::new();
    let Some(email) = params.email.as_deref() else {
        return controller;
    };

    controller.submit(&ProxySource::new(upstream.as_ref()), email).await;
    if let Some(id) = params.selected.as_deref() {
        if controller.select_raw(id) && params.find.is_some() {
            controller.find_code();
        }
    }
    controller
}

/// Render the page. An undecodable query string renders the idle page.
pub async fn inbox_page(
    State(upstream): State<Upstream>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Html<String> {
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let controller = build_controller(&upstream, &params).await;
    Html(render::inbox_page(&controller))
}
