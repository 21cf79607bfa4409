use actix_web::HttpResponse;
use askama::Template;

use crate::currency::Currency;
use crate::i18n::Labels;
use crate::nav;
use crate::session::{Role, Session, Tab};

pub fn render<T: Template>(template: T) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Template render error: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub struct NavEntryView {
    pub tab: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct CurrencyOption {
    pub code: &'static str,
    pub symbol: &'static str,
    pub selected: bool,
}

/// Everything the base layout needs: navigation for the current role,
/// the language and currency controls, and the one-shot notice.
pub struct ShellView {
    pub role: &'static str,
    pub role_badge: &'static str,
    pub lang: &'static str,
    pub other_lang: &'static str,
    pub labels: &'static Labels,
    pub nav: Vec<NavEntryView>,
    pub currencies: Vec<CurrencyOption>,
    pub notice: String,
    pub chat_open: bool,
}

pub fn shell(session: &Session, role: Role) -> ShellView {
    let labels = session.language.labels();
    let nav = nav::entries(role)
        .iter()
        .map(|tab| NavEntryView {
            tab: tab.code(),
            label: nav_label(labels, *tab),
            active: *tab == session.active_tab,
        })
        .collect();
    let currencies = Currency::all()
        .iter()
        .map(|currency| CurrencyOption {
            code: currency.code(),
            symbol: currency.symbol(),
            selected: *currency == session.currency,
        })
        .collect();
    ShellView {
        role: role.code(),
        role_badge: match role {
            Role::Resident => labels.resident_badge,
            Role::Guest => labels.guest_badge,
        },
        lang: session.language.code(),
        other_lang: session.language.other().code(),
        labels,
        nav,
        currencies,
        notice: session.notice.clone().unwrap_or_default(),
        chat_open: session.chat_open,
    }
}

fn nav_label(labels: &'static Labels, tab: Tab) -> &'static str {
    match tab {
        Tab::Home => labels.home,
        Tab::Map => labels.map,
        Tab::Announcements => labels.announcements,
        Tab::Marketplace => labels.market,
        Tab::Travel => labels.travel,
        Tab::RideShare => labels.rideshare,
    }
}
