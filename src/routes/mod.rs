pub mod guest;
pub mod public;
pub mod resident;

#[cfg(test)]
mod tests;

use actix_web::{http::header, HttpRequest, HttpResponse};

use crate::currency::{convert, Currency};
use crate::seed;
use crate::session::{self, Role};
use crate::state::AppState;

/// Every state transition answers with a redirect back to the shell,
/// which re-renders the active view.
pub fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, "/"))
        .finish()
}

/// Session id of the caller if their selected role matches. Role-gated
/// endpoints hit by the wrong (or no) role degrade to a plain redirect.
pub async fn role_session(state: &AppState, req: &HttpRequest, role: Role) -> Option<String> {
    let id = session::session_id(req)?;
    (state.role(&id).await == Some(role)).then_some(id)
}

/// Marketplace card with the price already converted for display.
pub struct ItemView {
    pub id: &'static str,
    pub title: &'static str,
    pub provider: &'static str,
    pub price: String,
    pub image: &'static str,
    pub sold: u32,
}

pub fn item_views(currency: Currency) -> Vec<ItemView> {
    seed::marketplace_items()
        .into_iter()
        .map(|item| ItemView {
            id: item.id,
            title: item.title,
            provider: item.provider,
            price: convert(item.price_azn, currency),
            image: item.image,
            sold: item.sold,
        })
        .collect()
}
