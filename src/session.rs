//! Per-visitor session state: selected role, active tab, display
//! preferences, reward points and the announcement board. Everything
//! is in-memory and scoped to one session cookie.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use chrono::Utc;
use uuid::Uuid;

use crate::currency::Currency;
use crate::i18n::Language;
use crate::models::{
    AnnouncementPost, POSTED_NOW, POST_AUTHOR, POST_CATEGORY_PERSONAL, POST_DESCRIPTION,
};
use crate::nav;
use crate::seed;

pub const SESSION_COOKIE: &str = "qh_session";

/// Points granted per QR scan activation on the map page.
pub const SCAN_REWARD: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Resident,
    Guest,
}

impl Role {
    pub fn code(self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Guest => "guest",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "resident" => Some(Role::Resident),
            "guest" => Some(Role::Guest),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Map,
    Announcements,
    Marketplace,
    Travel,
    RideShare,
}

impl Tab {
    pub fn code(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Map => "map",
            Tab::Announcements => "announcements",
            Tab::Marketplace => "marketplace",
            Tab::Travel => "travel",
            Tab::RideShare => "rideshare",
        }
    }

    pub fn parse(value: &str) -> Option<Tab> {
        match value {
            "home" => Some(Tab::Home),
            "map" => Some(Tab::Map),
            "announcements" => Some(Tab::Announcements),
            "marketplace" => Some(Tab::Marketplace),
            "travel" => Some(Tab::Travel),
            "rideshare" => Some(Tab::RideShare),
            _ => None,
        }
    }
}

/// The community board a resident session composes into. Starts from
/// the seed posts; composed posts are prepended, never deleted.
#[derive(Debug, Clone)]
pub struct Board {
    posts: Vec<AnnouncementPost>,
    pub composing: bool,
}

impl Board {
    pub fn new() -> Self {
        Board {
            posts: seed::announcements(),
            composing: false,
        }
    }

    pub fn posts(&self) -> &[AnnouncementPost] {
        &self.posts
    }

    /// Prepends a post with the fixed synthetic identity. An empty
    /// title is silently ignored and leaves the composer open.
    pub fn submit(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        let post = AnnouncementPost {
            id: self.posts.len() as u64 + 1,
            author: POST_AUTHOR.to_string(),
            title: title.to_string(),
            description: POST_DESCRIPTION.to_string(),
            category: POST_CATEGORY_PERSONAL.to_string(),
            posted_at: POSTED_NOW.to_string(),
        };
        self.posts.insert(0, post);
        self.composing = false;
        true
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub role: Option<Role>,
    pub active_tab: Tab,
    pub language: Language,
    pub currency: Currency,
    pub reward_points: u64,
    pub board: Board,
    pub add_product_open: bool,
    pub chat_open: bool,
    /// One-shot acknowledgment shown on the next render, then cleared.
    pub notice: Option<String>,
    pub created_at: String,
}

impl Session {
    pub fn new() -> Self {
        Session {
            id: new_id(),
            role: None,
            active_tab: Tab::Home,
            language: Language::Az,
            currency: Currency::Azn,
            reward_points: 0,
            board: Board::new(),
            add_product_open: false,
            chat_open: false,
            notice: None,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Valid only while no role is selected; a second selection is a
    /// no-op until `logout` clears the role again.
    pub fn select_role(&mut self, role: Role) -> bool {
        if self.role.is_some() {
            return false;
        }
        self.role = Some(role);
        self.active_tab = Tab::Home;
        true
    }

    /// Switches the active tab if it belongs to the current role's
    /// navigation list; anything else is a no-op.
    pub fn set_active_tab(&mut self, tab: Tab) -> bool {
        match self.role {
            Some(role) if nav::allows(role, tab) => {
                self.active_tab = tab;
                true
            }
            _ => false,
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn award_points(&mut self, amount: u64) {
        self.reward_points += amount;
    }

    /// Returns to the role-selection screen. Language, currency and
    /// reward points are preferences, not session data; they survive.
    pub fn logout(&mut self) {
        self.role = None;
        self.active_tab = Tab::Home;
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn session_cookie(req: &HttpRequest, id: &str) -> Cookie<'static> {
    let mut builder = Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(1));
    if req.connection_info().scheme() == "https" {
        builder = builder.secure(true);
    }
    builder.finish()
}

pub fn session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
