use std::{env, path::PathBuf, str::FromStr};

/// Shape of the `add_game` request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameSchema {
    /// `{Token, Teams, Scores}`
    #[default]
    Teams,
    /// `{Token, Front1, Back1, Front2, Back2, Score1, Score2}`
    Legacy,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown game schema '{0}' (expected 'teams' or 'legacy')")]
pub struct UnknownSchema(String);

impl FromStr for GameSchema {
    type Err = UnknownSchema;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "teams" => Ok(Self::Teams),
            "legacy" => Ok(Self::Legacy),
            other => Err(UnknownSchema(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub session_path: PathBuf,
    pub game_schema: GameSchema,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            api_base_url: "http://127.0.0.1:8080".to_string(),
            session_path: PathBuf::from("data/session.json"),
            game_schema: GameSchema::Teams,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, UnknownSchema> {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let api_base_url = env::var("FOOSBALL_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let session_path = env::var("APP_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_path);

        let game_schema = match env::var("FOOSBALL_GAME_SCHEMA") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.game_schema,
        };

        Ok(Self {
            port,
            api_base_url,
            session_path,
            game_schema,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_names_are_case_insensitive() {
        assert_eq!("Legacy".parse::<GameSchema>().unwrap(), GameSchema::Legacy);
        assert_eq!(" teams ".parse::<GameSchema>().unwrap(), GameSchema::Teams);
        let err = "flat".parse::<GameSchema>().unwrap_err();
        assert_eq!(err.to_string(), "unknown game schema 'flat' (expected 'teams' or 'legacy')");
    }
}
