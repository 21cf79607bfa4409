use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    currency::convert,
    routes::{self, item_views, ItemView},
    seed,
    session::{Role, Session},
    state::AppState,
    templates::{render, ShellView},
};

#[derive(Template)]
#[template(path = "home_guest.html")]
struct GuestHomeTemplate {
    shell: ShellView,
}

#[derive(Template)]
#[template(path = "market_guest.html")]
struct LocalMarketTemplate {
    shell: ShellView,
    items: Vec<ItemView>,
}

struct RideView {
    id: u64,
    driver: &'static str,
    origin: &'static str,
    destination: &'static str,
    departure: &'static str,
    car: &'static str,
    seats: u32,
    price: String,
    verified: bool,
}

#[derive(Template)]
#[template(path = "rideshare.html")]
struct RideShareTemplate {
    shell: ShellView,
    rides: Vec<RideView>,
}

struct TourView {
    name: &'static str,
    rating: String,
    price: String,
    category: &'static str,
}

#[derive(Template)]
#[template(path = "travel.html")]
struct TravelTemplate {
    shell: ShellView,
    tours: Vec<TourView>,
}

#[derive(Deserialize)]
struct OrderForm {
    item_id: String,
}

#[derive(Deserialize)]
struct RideForm {
    ride_id: u64,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/market/orders").route(web::post().to(order_item)))
        .service(web::resource("/rides/select").route(web::post().to(select_ride)));
}

pub fn home(shell: ShellView) -> HttpResponse {
    render(GuestHomeTemplate { shell })
}

pub fn local_market(shell: ShellView, session: &Session) -> HttpResponse {
    render(LocalMarketTemplate {
        shell,
        items: item_views(session.currency),
    })
}

pub fn rideshare(shell: ShellView, session: &Session) -> HttpResponse {
    let rides = seed::ride_offers()
        .into_iter()
        .map(|ride| RideView {
            id: ride.id,
            driver: ride.driver,
            origin: ride.origin,
            destination: ride.destination,
            departure: ride.departure,
            car: ride.car,
            seats: ride.seats,
            price: convert(ride.price_azn, session.currency),
            verified: ride.verified,
        })
        .collect();
    render(RideShareTemplate { shell, rides })
}

pub fn travel(shell: ShellView, session: &Session) -> HttpResponse {
    let tours = seed::tour_packages()
        .into_iter()
        .map(|tour| TourView {
            name: tour.name,
            rating: format!("{}", tour.rating),
            price: convert(tour.price_azn, session.currency),
            category: tour.category,
        })
        .collect();
    render(TravelTemplate { shell, tours })
}

/// Mocked purchase: acknowledges the order without touching inventory.
async fn order_item(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<OrderForm>,
) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Guest).await {
        let title = seed::marketplace_items()
            .into_iter()
            .find(|item| item.id == form.item_id)
            .map(|item| item.title);
        if let Some(title) = title {
            state
                .update(&id, |session| {
                    session.notice = Some(format!("\"{title}\" sifarişiniz qeydə alındı!"));
                })
                .await;
        }
    }
    routes::redirect_home()
}

/// Mocked booking: acknowledges the selection, no seat is held.
async fn select_ride(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<RideForm>,
) -> HttpResponse {
    if let Some(id) = routes::role_session(&state, &req, Role::Guest).await {
        let ride = seed::ride_offers()
            .into_iter()
            .find(|ride| ride.id == form.ride_id);
        if let Some(ride) = ride {
            state
                .update(&id, |session| {
                    session.notice = Some(format!(
                        "{} – {} səfəri üçün seçiminiz qeydə alındı.",
                        ride.origin, ride.destination
                    ));
                })
                .await;
        }
    }
    routes::redirect_home()
}
