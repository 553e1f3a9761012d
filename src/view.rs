use crate::models::{Game, PlayerRef, Team, User};

pub const MAX_SCORE: i32 = 10;
/// Score difference above which a result counts as decisive.
const DECISIVE_MARGIN: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub name: String,
    pub rating: String,
    pub won: u32,
    pub lost: u32,
    pub games: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub orange: Cell,
    pub black: Cell,
    pub result: Cell,
}

/// Ranking table, best rating first.
pub fn user_rows(users: &[User]) -> Vec<UserRow> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| b.elo.total_cmp(&a.elo));
    ranked
        .into_iter()
        .map(|user| UserRow {
            name: full_name(&user.first, &user.last),
            rating: format!("{:.0}", user.elo.round()),
            won: user.won,
            lost: user.lost,
            games: user.games,
        })
        .collect()
}

/// Options for a player select, placeholder first, then by first and last name.
pub fn player_options(users: &[User]) -> Vec<PlayerOption> {
    let mut sorted: Vec<&User> = users.iter().collect();
    sorted.sort_by(|a, b| a.first.cmp(&b.first).then_with(|| a.last.cmp(&b.last)));

    let placeholder = PlayerOption {
        value: String::new(),
        label: "-".to_string(),
    };
    std::iter::once(placeholder)
        .chain(sorted.into_iter().map(|user| PlayerOption {
            value: user.user.clone(),
            label: full_name(&user.first, &user.last),
        }))
        .collect()
}

/// One row per game, in the order the server returned them.
pub fn game_rows(games: &[Game]) -> Vec<GameRow> {
    games
        .iter()
        .map(|game| {
            let [orange_won, black_won] = winner_emphasis(game.score);
            GameRow {
                orange: Cell {
                    text: team_label(&game.teams[0]),
                    emphasized: orange_won,
                },
                black: Cell {
                    text: team_label(&game.teams[1]),
                    emphasized: black_won,
                },
                result: Cell {
                    text: format!("{} : {}", game.score[0], game.score[1]),
                    emphasized: is_decisive(game.score),
                },
            }
        })
        .collect()
}

pub fn score_options() -> Vec<i32> {
    (0..=MAX_SCORE).collect()
}

/// Which team's name cell is emphasized; only a strictly higher score wins.
pub fn winner_emphasis(score: [i32; 2]) -> [bool; 2] {
    [score[0] > score[1], score[1] > score[0]]
}

pub fn is_decisive(score: [i32; 2]) -> bool {
    score[0].abs_diff(score[1]) > DECISIVE_MARGIN
}

pub fn team_label(team: &Team) -> String {
    format!("{} + {}", short_name(&team.front), short_name(&team.back))
}

fn short_name(player: &PlayerRef) -> String {
    match player.last.chars().next() {
        Some(initial) => format!("{} {initial}.", player.first),
        None => player.first.clone(),
    }
}

fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
