use actix_web::{web, HttpRequest, HttpResponse, Result};
use askama::Template;
use serde::Deserialize;
use serde_json::json;

use crate::{
    currency::Currency,
    i18n::Language,
    router::{self, View},
    routes::{self, guest, resident},
    session::{self, Role, Tab, SCAN_REWARD},
    state::AppState,
    templates::{render, shell, ShellView},
};

#[derive(Template)]
#[template(path = "role_select.html")]
struct RoleSelectTemplate {
    lang: &'static str,
}

#[derive(Template)]
#[template(path = "map.html")]
struct MapTemplate {
    shell: ShellView,
    points: u64,
}

#[derive(Deserialize)]
struct RoleForm {
    role: String,
}

#[derive(Deserialize)]
struct TabForm {
    tab: String,
}

#[derive(Deserialize)]
struct LanguageForm {
    lang: String,
}

#[derive(Deserialize)]
struct CurrencyForm {
    currency: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/session/role").route(web::post().to(select_role)))
        .service(web::resource("/session/tab").route(web::post().to(switch_tab)))
        .service(web::resource("/session/language").route(web::post().to(set_language)))
        .service(web::resource("/session/currency").route(web::post().to(set_currency)))
        .service(web::resource("/session/logout").route(web::post().to(logout)))
        .service(web::resource("/assistant/toggle").route(web::post().to(toggle_assistant)))
        .service(web::resource("/map/scan").route(web::post().to(scan)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

/// The shell: role selection until a role is picked, then the view
/// the router resolves for the session's active tab.
async fn index(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse> {
    let session = match session::session_id(&req) {
        Some(id) => state.render_state(&id).await,
        None => None,
    };

    let session = match session {
        Some(session) => session,
        None => {
            let session = state.create_session().await;
            let cookie = session::session_cookie(&req, &session.id);
            let mut response = render(RoleSelectTemplate {
                lang: session.language.code(),
            });
            response
                .add_cookie(&cookie)
                .map_err(actix_web::error::ErrorInternalServerError)?;
            return Ok(response);
        }
    };

    let role = match session.role {
        Some(role) => role,
        None => {
            return Ok(render(RoleSelectTemplate {
                lang: session.language.code(),
            }))
        }
    };

    let shell = shell(&session, role);
    Ok(match router::resolve(session.active_tab, role) {
        View::ResidentHome => resident::home(shell),
        View::GuestHome => guest::home(shell),
        View::Map => render(MapTemplate {
            shell,
            points: session.reward_points,
        }),
        View::Announcements => resident::announcements(shell, &session),
        View::SalesDashboard => resident::sales_dashboard(shell, &session),
        View::LocalMarket => guest::local_market(shell, &session),
        View::Travel => guest::travel(shell, &session),
        View::RideShare => guest::rideshare(shell, &session),
    })
}

async fn select_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RoleForm>,
) -> HttpResponse {
    if let (Some(id), Some(role)) = (session::session_id(&req), Role::parse(&form.role)) {
        state
            .update(&id, |session| {
                session.select_role(role);
            })
            .await;
    }
    routes::redirect_home()
}

async fn switch_tab(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<TabForm>,
) -> HttpResponse {
    if let (Some(id), Some(tab)) = (session::session_id(&req), Tab::parse(&form.tab)) {
        state
            .update(&id, |session| {
                session.set_active_tab(tab);
            })
            .await;
    }
    routes::redirect_home()
}

async fn set_language(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LanguageForm>,
) -> HttpResponse {
    if let (Some(id), Some(language)) = (session::session_id(&req), Language::parse(&form.lang)) {
        state
            .update(&id, |session| session.set_language(language))
            .await;
    }
    routes::redirect_home()
}

async fn set_currency(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<CurrencyForm>,
) -> HttpResponse {
    if let (Some(id), Some(currency)) =
        (session::session_id(&req), Currency::parse(&form.currency))
    {
        state
            .update(&id, |session| session.set_currency(currency))
            .await;
    }
    routes::redirect_home()
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = session::session_id(&req) {
        state.update(&id, |session| session.logout()).await;
    }
    routes::redirect_home()
}

async fn toggle_assistant(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = session::session_id(&req) {
        state
            .update(&id, |session| session.chat_open = !session.chat_open)
            .await;
    }
    routes::redirect_home()
}

/// Simulated QR check-in: each activation awards a fixed increment.
async fn scan(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = session::session_id(&req) {
        state
            .update(&id, |session| {
                if session.role.is_some() {
                    session.award_points(SCAN_REWARD);
                }
            })
            .await;
    }
    routes::redirect_home()
}
