use crate::config::GameSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub user: String,
    pub first: String,
    pub last: String,
    pub elo: f64,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub lost: u32,
    #[serde(default)]
    pub games: u32,
}

/// A player as embedded in a game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRef {
    #[serde(default)]
    pub user: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Team {
    pub front: PlayerRef,
    pub back: PlayerRef,
}

/// A recorded game. Team 0 plays orange, team 1 plays black.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "WireGame")]
pub struct Game {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub teams: [Team; 2],
    pub score: [i32; 2],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireGame {
    Current(CurrentGame),
    Legacy(LegacyGame),
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CurrentGame {
    #[serde(default)]
    id: Option<i64>,
    teams: [Team; 2],
    score: [i32; 2],
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct LegacyGame {
    #[serde(default)]
    id: Option<i64>,
    front1: PlayerRef,
    back1: PlayerRef,
    front2: PlayerRef,
    back2: PlayerRef,
    score1: i32,
    score2: i32,
}

impl From<WireGame> for Game {
    fn from(wire: WireGame) -> Self {
        match wire {
            WireGame::Current(game) => Self {
                id: game.id,
                teams: game.teams,
                score: game.score,
            },
            WireGame::Legacy(game) => Self {
                id: game.id,
                teams: [
                    Team {
                        front: game.front1,
                        back: game.back1,
                    },
                    Team {
                        front: game.front2,
                        back: game.back2,
                    },
                ],
                score: [game.score1, game.score2],
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest {
    pub user: String,
    pub password: String,
    pub first: String,
    pub last: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TokenResponse {
    pub token: String,
}

/// Handles of the two players forming one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamSelection {
    pub front: String,
    pub back: String,
}

/// A validated game result ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSubmission {
    pub teams: [TeamSelection; 2],
    pub scores: [i32; 2],
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AddGameRequest<'a> {
    Teams(TeamsGameRequest<'a>),
    Legacy(LegacyGameRequest<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamsGameRequest<'a> {
    pub token: &'a str,
    pub teams: &'a [TeamSelection; 2],
    pub scores: [i32; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegacyGameRequest<'a> {
    pub token: &'a str,
    pub front1: &'a str,
    pub back1: &'a str,
    pub front2: &'a str,
    pub back2: &'a str,
    pub score1: i32,
    pub score2: i32,
}

impl<'a> AddGameRequest<'a> {
    pub fn new(token: &'a str, game: &'a GameSubmission, schema: GameSchema) -> Self {
        match schema {
            GameSchema::Teams => Self::Teams(TeamsGameRequest {
                token,
                teams: &game.teams,
                scores: game.scores,
            }),
            GameSchema::Legacy => Self::Legacy(LegacyGameRequest {
                token,
                front1: &game.teams[0].front,
                back1: &game.teams[0].back,
                front2: &game.teams[1].front,
                back2: &game.teams[1].back,
                score1: game.scores[0],
                score2: game.scores[1],
            }),
        }
    }
}
