use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    models::AnnouncementPost,
    routes::{self, item_views, ItemView},
    session::{Role, Session},
    state::AppState,
    templates::{render, ShellView},
};

#[derive(Template)]
#[template(path = "home_resident.html")]
struct ResidentHomeTemplate {
    shell: ShellView,
}

#[derive(Template)]
#[template(path = "announcements.html")]
struct AnnouncementsTemplate {
    shell: ShellView,
    posts: Vec<AnnouncementPost>,
    composing: bool,
}

#[derive(Template)]
#[template(path = "market_resident.html")]
struct SalesDashboardTemplate {
    shell: ShellView,
    items: Vec<ItemView>,
    add_product_open: bool,
}

#[derive(Deserialize)]
struct PostForm {
    title: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/announcements/compose").route(web::post().to(toggle_composer)))
        .service(web::resource("/announcements").route(web::post().to(submit_post)))
        .service(
            web::resource("/market/products/compose").route(web::post().to(toggle_add_product)),
        )
        .service(web::resource("/market/products").route(web::post().to(add_product)));
}

pub fn home(shell: ShellView) -> HttpResponse {
    render(ResidentHomeTemplate { shell })
}

pub fn announcements(shell: ShellView, session: &Session) -> HttpResponse {
    render(AnnouncementsTemplate {
        shell,
        posts: session.board.posts().to_vec(),
        composing: session.board.composing,
    })
}

pub fn sales_dashboard(shell: ShellView, session: &Session) -> HttpResponse {
    render(SalesDashboardTemplate {
        shell,
        items: item_views(session.currency),
        add_product_open: session.add_product_open,
    })
}

async fn toggle_composer(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Resident).await {
        state
            .update(&id, |session| {
                session.board.composing = !session.board.composing;
            })
            .await;
    }
    routes::redirect_home()
}

async fn submit_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<PostForm>,
) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Resident).await {
        state
            .update(&id, |session| {
                session.board.submit(&form.title);
            })
            .await;
    }
    routes::redirect_home()
}

async fn toggle_add_product(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Resident).await {
        state
            .update(&id, |session| {
                session.add_product_open = !session.add_product_open;
            })
            .await;
    }
    routes::redirect_home()
}

/// Mocked listing flow: acknowledges and closes the dialog without
/// appending to the catalogue.
async fn add_product(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Resident).await {
        state
            .update(&id, |session| {
                session.add_product_open = false;
                session.notice = Some("Məhsul satışa çıxarıldı!".to_string());
            })
            .await;
    }
    routes::redirect_home()
}
