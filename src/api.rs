use crate::config::GameSchema;
use crate::errors::ApiError;
use crate::models::{
    AddGameRequest, Game, GameSubmission, LoginRequest, RegisterRequest, TokenRequest,
    TokenResponse, User,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    schema: GameSchema,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, schema: GameSchema) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            schema,
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.post_json("login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.post_json("register", request).await
    }

    pub async fn users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.post_json("users", &TokenRequest { token }).await
    }

    pub async fn games(&self, token: &str) -> Result<Vec<Game>, ApiError> {
        self.post_json("games", &TokenRequest { token }).await
    }

    pub async fn add_game(&self, token: &str, game: &GameSubmission) -> Result<(), ApiError> {
        let request = AddGameRequest::new(token, game, self.schema);
        self.post("add_game", &request).await?;
        Ok(())
    }

    /// POST a JSON body and decode the JSON answer.
    async fn post_json<T, U>(&self, endpoint: &str, body: &T) -> Result<U, ApiError>
    where
        T: Serialize,
        U: DeserializeOwned,
    {
        let (status, text) = self.post(endpoint, body).await?;
        let decoded = serde_json::from_str::<U>(&text);
        match decoded {
            Ok(value) => Ok(value),
            Err(source) => {
                warn!("undecodable answer from {endpoint}: {source}");
                Err(ApiError::Decode {
                    status,
                    body: text,
                    source,
                })
            }
        }
    }

    /// POST a JSON body; any 2xx status is success.
    async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<(reqwest::StatusCode, String), ApiError> {
        let url = format!("{}/api/v1/{endpoint}", self.base_url);
        let response = self.http.post(&url).json(body).send().await.map_err(|err| {
            warn!("request to {endpoint} failed: {err}");
            ApiError::Transport(err)
        })?;

        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            Ok((status, text))
        } else {
            warn!("{endpoint} answered {status}");
            Err(ApiError::Status { status, body: text })
        }
    }
}
