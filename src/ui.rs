use crate::models::{Game, User};
use crate::page::Page;
use crate::view::{game_rows, player_options, user_rows, Cell, GameRow, PlayerOption, UserRow};
use std::fmt::Write;

/// Everything needed to draw one screen.
pub struct PageView<'a> {
    pub page: Page,
    pub notice: Option<&'a str>,
    pub users: &'a [User],
    pub games: &'a [Game],
    pub score_options: &'a [i32],
}

pub fn render_page(view: &PageView<'_>) -> String {
    let notice = view
        .notice
        .map(|message| format!(r#"<div class="notice" role="alert">{}</div>"#, escape(message)))
        .unwrap_or_default();
    let players = options_html(&player_options(view.users));
    let scores = score_options_html(view.score_options);

    PAGE_HTML
        .replace("{{NOTICE}}", &notice)
        .replace("{{DISPLAY_LOGIN}}", display(view.page, Page::Login))
        .replace("{{DISPLAY_REGISTER}}", display(view.page, Page::Register))
        .replace("{{DISPLAY_GAMES}}", display(view.page, Page::Games))
        .replace("{{DISPLAY_ADDGAME}}", display(view.page, Page::AddGame))
        .replace("{{USERS_TABLE}}", &users_table(&user_rows(view.users)))
        .replace("{{GAMES_TABLE}}", &games_table(&game_rows(view.games)))
        .replace("{{PLAYER_OPTIONS}}", &players)
        .replace("{{SCORE_OPTIONS}}", &scores)
}

fn display(current: Page, page: Page) -> &'static str {
    if current == page { "block" } else { "none" }
}

fn users_table(rows: &[UserRow]) -> String {
    let mut html = String::from(
        "<thead><tr><th>Player</th><th>Elo Score</th><th>Won</th><th>Lost</th><th>Games</th></tr></thead><tbody>",
    );
    for row in rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.name),
            escape(&row.rating),
            row.won,
            row.lost,
            row.games
        );
    }
    html.push_str("</tbody>");
    html
}

fn games_table(rows: &[GameRow]) -> String {
    let mut html = String::from(
        "<thead><tr><th>Team Orange</th><th>Team Black</th><th>Result</th></tr></thead><tbody>",
    );
    for row in rows {
        let _ = write!(
            html,
            "<tr>{}{}{}</tr>",
            cell_html(&row.orange),
            cell_html(&row.black),
            cell_html(&row.result)
        );
    }
    html.push_str("</tbody>");
    html
}

fn cell_html(cell: &Cell) -> String {
    if cell.emphasized {
        format!("<td><strong>{}</strong></td>", escape(&cell.text))
    } else {
        format!("<td>{}</td>", escape(&cell.text))
    }
}

fn options_html(options: &[PlayerOption]) -> String {
    options
        .iter()
        .map(|option| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape(&option.value),
                escape(&option.label)
            )
        })
        .collect()
}

fn score_options_html(scores: &[i32]) -> String {
    scores
        .iter()
        .map(|score| format!(r#"<option value="{score}">{score}</option>"#))
        .collect()
}

/// HTML-escapes text. Braces are escaped too so inserted text can never form a template marker.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            '}' => escaped.push_str("&#125;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Foosball Scores</title>
  <style>
    body {
      margin: 0;
      background: #f4f1ea;
      color: #26241f;
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    main {
      width: min(760px, 100%);
      background: white;
      border-radius: 18px;
      box-shadow: 0 18px 40px rgba(38, 36, 31, 0.12);
      padding: 28px;
    }

    .notice {
      width: min(760px, 100%);
      margin-bottom: 16px;
      padding: 14px 18px;
      border-radius: 12px;
      background: #ffe3d6;
      white-space: pre-line;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      margin: 12px 0 24px;
    }

    th, td {
      text-align: left;
      padding: 6px 8px;
      border-bottom: 1px solid #ece7dc;
    }

    form {
      display: grid;
      gap: 10px;
    }

    .team {
      display: grid;
      grid-template-columns: 1fr 1fr 80px;
      gap: 8px;
    }
  </style>
</head>
<body>
  {{NOTICE}}
  <main id="page_login" style="display: {{DISPLAY_LOGIN}}">
    <h1>Login</h1>
    <form id="form_login" method="post" action="/login">
      <input name="username" placeholder="Username" />
      <input name="password" type="password" placeholder="Password" />
      <button type="submit">Login</button>
    </form>
    <p><a id="login_register" href="/page/register">Register a new account</a></p>
  </main>
  <main id="page_register" style="display: {{DISPLAY_REGISTER}}">
    <h1>Register</h1>
    <form id="form_register" method="post" action="/register">
      <input name="username" placeholder="Username" />
      <input name="password" type="password" placeholder="Password" />
      <input name="first" placeholder="First name" />
      <input name="last" placeholder="Last name" />
      <button type="submit">Register</button>
    </form>
    <p><a id="register_login" href="/page/login">Back to login</a></p>
  </main>
  <main id="page_games" style="display: {{DISPLAY_GAMES}}">
    <h1>Players</h1>
    <table id="users_table">{{USERS_TABLE}}</table>
    <h1>Games</h1>
    <p><a id="games_add" href="/page/addgame">Add game</a></p>
    <table id="games_table">{{GAMES_TABLE}}</table>
    <form method="post" action="/logout">
      <button id="games_logout" type="submit">Logout</button>
    </form>
  </main>
  <main id="page_addgame" style="display: {{DISPLAY_ADDGAME}}">
    <h1>Add game</h1>
    <form id="form_addgame" method="post" action="/add_game">
      <div class="team">
        <select class="select-player" name="front1">{{PLAYER_OPTIONS}}</select>
        <select class="select-player" name="back1">{{PLAYER_OPTIONS}}</select>
        <select class="select-score" name="score1">{{SCORE_OPTIONS}}</select>
      </div>
      <div class="team">
        <select class="select-player" name="front2">{{PLAYER_OPTIONS}}</select>
        <select class="select-player" name="back2">{{PLAYER_OPTIONS}}</select>
        <select class="select-score" name="score2">{{SCORE_OPTIONS}}</select>
      </div>
      <button type="submit">Save game</button>
    </form>
    <p><a id="addgame_back" href="/page/games">Back</a></p>
  </main>
</body>
</html>
"#;
