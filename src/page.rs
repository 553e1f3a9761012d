use serde::Deserialize;

/// The four mutually exclusive screens of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Login,
    Register,
    Games,
    #[serde(rename = "addgame")]
    AddGame,
}

/// Server data a page needs before it can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    Nothing,
    Users,
    Everything,
}

/// Where a flow ends up after it finishes or aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Show the current page again.
    Stay,
    Page(Page),
    /// Reload the landing page, which picks games or login from the token.
    Root,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Login, Page::Register, Page::Games, Page::AddGame];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::Games => "games",
            Page::AddGame => "addgame",
        }
    }

    pub fn path(self) -> String {
        format!("/page/{}", self.slug())
    }

    /// DOM id of the page container.
    pub fn container_id(self) -> String {
        format!("page_{}", self.slug())
    }

    pub fn refresh(self) -> Refresh {
        match self {
            Page::Login | Page::Register => Refresh::Nothing,
            Page::Games => Refresh::Everything,
            Page::AddGame => Refresh::Users,
        }
    }

    /// Page shown at the site root.
    pub fn landing(logged_in: bool) -> Page {
        if logged_in { Page::Games } else { Page::Login }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_pages_refresh_and_forms_do_not() {
        assert_eq!(Page::Login.refresh(), Refresh::Nothing);
        assert_eq!(Page::Register.refresh(), Refresh::Nothing);
        assert_eq!(Page::Games.refresh(), Refresh::Everything);
        assert_eq!(Page::AddGame.refresh(), Refresh::Users);
    }

    #[test]
    fn slugs_round_trip_through_path_segments() {
        for page in Page::ALL {
            let parsed: Page = serde_json::from_value(serde_json::json!(page.slug())).unwrap();
            assert_eq!(parsed, page);
            assert_eq!(page.path(), format!("/page/{}", page.slug()));
        }
    }

    #[test]
    fn landing_depends_on_token() {
        assert_eq!(Page::landing(true), Page::Games);
        assert_eq!(Page::landing(false), Page::Login);
    }
}
