use crate::api::ApiClient;
use crate::config::Config;
use crate::errors::{ApiError, ClientError};
use crate::forms::{AddGameForm, LoginForm, RegisterForm};
use crate::page::{Landing, Page, Refresh};
use crate::state::SyncData;
use crate::storage::TokenStore;
use reqwest::StatusCode;
use tracing::{error, info, warn};

pub const WRONG_CREDENTIALS: &str = "Wrong credentials.";
pub const USERNAME_TAKEN: &str = "Your chosen username is already taken.";

#[derive(Debug, Clone)]
pub struct Controller {
    api: ApiClient,
    tokens: TokenStore,
}

impl Controller {
    pub fn new(api: ApiClient, tokens: TokenStore) -> Self {
        Self { api, tokens }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ApiClient::new(config.api_base_url.clone(), config.game_schema),
            TokenStore::new(config.session_path.clone()),
        )
    }

    pub async fn get_token(&self) -> Option<String> {
        self.tokens.get_token().await
    }

    /// Page shown at the site root.
    pub async fn landing(&self) -> Page {
        Page::landing(self.get_token().await.is_some())
    }

    /// Users and games fetched concurrently; `None` when not logged in.
    pub async fn fetch_everything(&self) -> Result<Option<SyncData>, ClientError> {
        self.refresh(Refresh::Everything).await
    }

    pub async fn refresh(&self, refresh: Refresh) -> Result<Option<SyncData>, ClientError> {
        if refresh == Refresh::Nothing {
            return Ok(None);
        }
        let Some(token) = self.get_token().await else {
            return Ok(None);
        };

        let fetched = match refresh {
            Refresh::Everything => {
                tokio::try_join!(self.api.users(&token), self.api.games(&token)).map(|(users, games)| {
                    SyncData {
                        users,
                        games: Some(games),
                    }
                })
            }
            _ => self.api.users(&token).await.map(|users| SyncData { users, games: None }),
        };

        match fetched {
            Ok(data) => Ok(Some(data)),
            Err(err) => Err(self.handle_api_error(err).await),
        }
    }

    pub async fn login(&self, form: LoginForm) -> Result<Page, ClientError> {
        let request = form.into_request();
        match self.api.login(&request).await {
            Ok(response) => {
                self.tokens.set_token(&response.token).await?;
                info!("logged in");
                Ok(Page::Games)
            }
            Err(err) if err.status() == Some(StatusCode::UNAUTHORIZED) => {
                warn!("login rejected");
                Err(ClientError::Rejected(WRONG_CREDENTIALS))
            }
            Err(err) => Err(self.handle_api_error(err).await),
        }
    }

    pub async fn register(&self, form: RegisterForm) -> Result<Page, ClientError> {
        let request = form.validate()?;
        match self.api.register(&request).await {
            Ok(response) => {
                self.tokens.set_token(&response.token).await?;
                info!("registered new account");
                Ok(Page::Games)
            }
            Err(err) if err.status() == Some(StatusCode::FORBIDDEN) => {
                warn!("registration rejected");
                Err(ClientError::Rejected(USERNAME_TAKEN))
            }
            Err(err) => Err(self.handle_api_error(err).await),
        }
    }

    pub async fn add_game(&self, form: AddGameForm) -> Result<Page, ClientError> {
        let game = form.validate()?;
        let Some(token) = self.get_token().await else {
            return Err(ClientError::Unauthorized);
        };

        match self.api.add_game(&token, &game).await {
            Ok(()) => {
                info!("game recorded: {} : {}", game.scores[0], game.scores[1]);
                Ok(Page::Games)
            }
            Err(err) => Err(self.handle_api_error(err).await),
        }
    }

    pub async fn logout(&self) -> Result<Landing, std::io::Error> {
        self.tokens.clear().await?;
        info!("logged out");
        Ok(Landing::Root)
    }

    /// Classifies a failed API call. A rejected token is dropped from storage.
    pub async fn handle_api_error(&self, err: ApiError) -> ClientError {
        if err.status() == Some(StatusCode::UNAUTHORIZED) {
            warn!("session token rejected, forcing login");
            if let Err(io) = self.tokens.clear().await {
                error!("failed to clear session: {io}");
            }
            return ClientError::Unauthorized;
        }

        match err {
            ApiError::Status { status, body } | ApiError::Decode { status, body, .. } => {
                ClientError::Server { status, body }
            }
            ApiError::Transport(err) => match err.status() {
                Some(status) => ClientError::Server {
                    status,
                    body: String::new(),
                },
                None => ClientError::Network(err),
            },
        }
    }
}
