use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "Token")]
    token: String,
    saved_at: String,
}

/// Persists the session token in a small JSON file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored token, or `None` when not logged in.
    pub async fn get_token(&self) -> Option<String> {
        match fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<SessionFile>(&bytes) {
                Ok(session) => Some(session.token),
                Err(err) => {
                    error!("failed to parse session file: {err}");
                    None
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read session file: {err}");
                None
            }
        }
    }

    pub async fn set_token(&self, token: &str) -> Result<(), std::io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let session = SessionFile {
            token: token.to_string(),
            saved_at: Local::now().to_rfc3339(),
        };
        let payload = serde_json::to_vec_pretty(&session)?;
        fs::write(&self.path, payload).await?;
        info!("session stored");
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), std::io::Error> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                info!("session cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }
}
