use crate::errors::ClientError;
use crate::models::{GameSubmission, LoginRequest, RegisterRequest, TeamSelection};
use serde::Deserialize;

pub const FORM_INCOMPLETE: &str = "Please fill out the form first";
pub const PLAYERS_MISSING: &str = "Invalid input: Players must be selected.";
pub const SCORES_INVALID: &str = "Invalid input: Scores must be integers.";
pub const TEAMS_OVERLAP: &str = "Two teams must be non-intersecting.";

const MIN_USERNAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 3;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn into_request(self) -> LoginRequest {
        LoginRequest {
            user: self.username,
            password: self.password,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub first: String,
    pub last: String,
}

impl RegisterForm {
    pub fn validate(self) -> Result<RegisterRequest, ClientError> {
        if self.username.chars().count() < MIN_USERNAME_LEN
            || self.password.chars().count() < MIN_PASSWORD_LEN
            || self.first.is_empty()
            || self.last.is_empty()
        {
            return Err(ClientError::Invalid(FORM_INCOMPLETE));
        }

        Ok(RegisterRequest {
            user: self.username,
            password: self.password,
            first: self.first,
            last: self.last,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddGameForm {
    pub front1: String,
    pub back1: String,
    pub front2: String,
    pub back2: String,
    pub score1: String,
    pub score2: String,
}

impl AddGameForm {
    pub fn validate(self) -> Result<GameSubmission, ClientError> {
        let players = [&self.front1, &self.back1, &self.front2, &self.back2];
        if players.iter().any(|handle| handle.is_empty()) {
            return Err(ClientError::Invalid(PLAYERS_MISSING));
        }

        let (Ok(score1), Ok(score2)) = (
            self.score1.trim().parse::<i32>(),
            self.score2.trim().parse::<i32>(),
        ) else {
            return Err(ClientError::Invalid(SCORES_INVALID));
        };

        let team0 = [&self.front1, &self.back1];
        let team1 = [&self.front2, &self.back2];
        if team0.iter().any(|handle| team1.contains(handle)) {
            return Err(ClientError::Invalid(TEAMS_OVERLAP));
        }

        Ok(GameSubmission {
            teams: [
                TeamSelection {
                    front: self.front1,
                    back: self.back1,
                },
                TeamSelection {
                    front: self.front2,
                    back: self.back2,
                },
            ],
            scores: [score1, score2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str) -> RegisterForm {
        RegisterForm {
            username: username.into(),
            password: password.into(),
            first: "Ann".into(),
            last: "Lee".into(),
        }
    }

    fn game(players: [&str; 4], scores: [&str; 2]) -> AddGameForm {
        AddGameForm {
            front1: players[0].into(),
            back1: players[1].into(),
            front2: players[2].into(),
            back2: players[3].into(),
            score1: scores[0].into(),
            score2: scores[1].into(),
        }
    }

    fn invalid_message(result: Result<GameSubmission, ClientError>) -> &'static str {
        match result {
            Err(ClientError::Invalid(message)) => message,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn register_enforces_minimum_lengths() {
        assert!(matches!(register("a", "secret").validate(), Err(ClientError::Invalid(FORM_INCOMPLETE))));
        assert!(matches!(register("ann", "ab").validate(), Err(ClientError::Invalid(_))));
        let request = register("an", "abc").validate().unwrap();
        assert_eq!(request.user, "an");
    }

    #[test]
    fn register_requires_names() {
        let mut form = register("ann", "secret");
        form.last.clear();
        assert!(form.validate().is_err());
    }

    #[test]
    fn username_length_counts_characters() {
        assert!(register("é", "secret").validate().is_err());
        assert!(register("éé", "secret").validate().is_ok());
    }

    #[test]
    fn add_game_requires_all_players() {
        let result = game(["ann", "", "cid", "dan"], ["10", "7"]).validate();
        assert_eq!(invalid_message(result), PLAYERS_MISSING);
    }

    #[test]
    fn add_game_requires_integer_scores() {
        assert_eq!(
            invalid_message(game(["ann", "bob", "cid", "dan"], ["ten", "7"]).validate()),
            SCORES_INVALID
        );
        assert_eq!(
            invalid_message(game(["ann", "bob", "cid", "dan"], ["10", ""]).validate()),
            SCORES_INVALID
        );
    }

    #[test]
    fn add_game_rejects_every_cross_team_overlap() {
        let overlapping = [
            ["ann", "bob", "ann", "dan"],
            ["ann", "bob", "cid", "ann"],
            ["ann", "bob", "bob", "dan"],
            ["ann", "bob", "cid", "bob"],
        ];
        for players in overlapping {
            assert_eq!(invalid_message(game(players, ["10", "7"]).validate()), TEAMS_OVERLAP);
        }
    }

    #[test]
    fn valid_game_has_disjoint_teams() {
        let submission = game(["ann", "bob", "cid", "dan"], ["10", " 7"]).validate().unwrap();
        assert_eq!(submission.scores, [10, 7]);
        let team0 = [&submission.teams[0].front, &submission.teams[0].back];
        assert!(!team0.contains(&&submission.teams[1].front));
        assert!(!team0.contains(&&submission.teams[1].back));
    }
}
