use crate::errors::{AppError, ClientError};
use crate::forms::{AddGameForm, LoginForm, RegisterForm};
use crate::page::{Landing, Page};
use crate::state::{AppState, ClientState};
use crate::ui::{render_page, PageView};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::{debug, info, warn};

pub async fn index(State(state): State<AppState>) -> Redirect {
    let page = state.controller.landing().await;
    Redirect::to(&page.path())
}

pub async fn show_page(State(state): State<AppState>, Path(page): Path<Page>) -> Response {
    let ticket = {
        let mut client = state.client.lock().await;
        let ticket = client.switch_to_page(page);
        // A pending notice comes from a failed flow; show it before fetching again.
        if client.has_notice() { None } else { ticket }
    };
    info!("switched to page {}", page.slug());

    if let Some(ticket) = ticket {
        match state.controller.refresh(ticket.refresh).await {
            Ok(Some(data)) => {
                if !state.client.lock().await.apply_sync(ticket, data) {
                    debug!("discarded stale refresh for page {}", page.slug());
                }
            }
            Ok(None) => {}
            Err(err) => return abort(&state, err).await.into_response(),
        }
    }

    let mut client = state.client.lock().await;
    let notice = client.take_notice();
    let view = PageView {
        page,
        notice: notice.as_deref(),
        users: &client.users,
        games: &client.games,
        score_options: &state.score_options,
    };
    Html(render_page(&view)).into_response()
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Redirect {
    let result = state.controller.login(form).await;
    conclude(&state, result).await
}

pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Redirect {
    let result = state.controller.register(form).await;
    conclude(&state, result).await
}

pub async fn add_game(State(state): State<AppState>, Form(form): Form<AddGameForm>) -> Redirect {
    let result = state.controller.add_game(form).await;
    conclude(&state, result).await
}

pub async fn logout(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let landing = state.controller.logout().await?;
    *state.client.lock().await = ClientState::default();
    Ok(Redirect::to(&landing_path(&state, landing).await))
}

async fn conclude(state: &AppState, result: Result<Page, ClientError>) -> Redirect {
    match result {
        Ok(page) => Redirect::to(&page.path()),
        Err(err) => abort(state, err).await,
    }
}

/// Queues the failure's alert and sends the user where the failure says.
async fn abort(state: &AppState, err: ClientError) -> Redirect {
    warn!("flow aborted: {err}");
    {
        let mut client = state.client.lock().await;
        if matches!(err, ClientError::Unauthorized) {
            client.clear_caches();
        }
        if let Some(message) = err.alert() {
            client.set_notice(message);
        }
    }
    Redirect::to(&landing_path(state, err.landing()).await)
}

async fn landing_path(state: &AppState, landing: Landing) -> String {
    match landing {
        Landing::Stay => state.client.lock().await.page.path(),
        Landing::Page(page) => page.path(),
        Landing::Root => "/".to_string(),
    }
}
