//! Service-level tests driving the portal the way a browser would:
//! one session cookie, form posts for every state transition.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};

use crate::routes::{guest, public, resident};
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

fn test_app(
    state: AppState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(public::configure)
        .configure(resident::configure)
        .configure(guest::configure)
}

#[actix_web::test]
async fn resident_walkthrough() {
    let state = AppState::new();
    let app = actix_test::init_service(test_app(state.clone())).await;

    // First visit: role selection plus a fresh session cookie.
    let response =
        actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request())
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie: Cookie<'static> = response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
        .expect("session cookie");
    let body = actix_test::read_body(response).await;
    let body = std::str::from_utf8(&body).expect("utf8 body");
    assert!(body.contains("Statusunu Seç"));

    // Select resident: home shows the four KPI cards.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/role")
            .cookie(cookie.clone())
            .set_form([("role", "resident")])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Energy (kWh)"));
    assert!(body.contains("Yerli Sakin"));

    // Announcements: two seed posts.
    switch_tab(&app, &cookie, "announcements").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Həsən dayı"));
    assert!(body.contains("Aygün xanım"));

    // Composing a post prepends it.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/announcements")
            .cookie(cookie.clone())
            .set_form([("title", "Test")])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let body = fetch_index(&app, &cookie).await;
    let new_post = body.find("Test").expect("new post rendered");
    let seed_post = body.find("Həsən dayı").expect("seed post rendered");
    assert!(new_post < seed_post);

    // Marketplace renders the sales dashboard variant.
    switch_tab(&app, &cookie, "marketplace").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Satış") || body.contains("Biznesim"));
    assert!(body.contains("Satılıb"));

    // Guest-only tabs are not reachable for a resident.
    switch_tab(&app, &cookie, "travel").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(!body.contains("Tur Paketləri"));

    // Logout returns to role selection; re-selecting goes straight home.
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/logout")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Statusunu Seç"));

    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/role")
            .cookie(cookie.clone())
            .set_form([("role", "resident")])
            .to_request(),
    )
    .await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Energy (kWh)"));
}

#[actix_web::test]
async fn guest_orders_are_acknowledged_once() {
    let state = AppState::new();
    let app = actix_test::init_service(test_app(state.clone())).await;
    let cookie = open_session(&app).await;

    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/role")
            .cookie(cookie.clone())
            .set_form([("role", "guest")])
            .to_request(),
    )
    .await;

    // Prices follow the selected display currency.
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/currency")
            .cookie(cookie.clone())
            .set_form([("currency", "EUR")])
            .to_request(),
    )
    .await;
    switch_tab(&app, &cookie, "marketplace").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Yerli Bazar"));
    assert!(body.contains("2.7 €"));

    // Buying only produces a one-shot acknowledgment.
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/market/orders")
            .cookie(cookie.clone())
            .set_form([("item_id", "m1")])
            .to_request(),
    )
    .await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("sifarişiniz qeydə alındı"));
    let body = fetch_index(&app, &cookie).await;
    assert!(!body.contains("sifarişiniz qeydə alındı"));

    // Resident-only composition is a no-op for a guest session.
    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/announcements")
            .cookie(cookie.clone())
            .set_form([("title", "Qadağandır")])
            .to_request(),
    )
    .await;
    let session = state
        .render_state(cookie.value())
        .await
        .expect("session exists");
    assert_eq!(session.board.posts().len(), 2);

    // Resident-only tab is rejected; the guest stays on marketplace.
    switch_tab(&app, &cookie, "announcements").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("Yerli Bazar"));
}

#[actix_web::test]
async fn scanning_awards_fifty_points_per_activation() {
    let state = AppState::new();
    let app = actix_test::init_service(test_app(state)).await;
    let cookie = open_session(&app).await;

    actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/session/role")
            .cookie(cookie.clone())
            .set_form([("role", "guest")])
            .to_request(),
    )
    .await;
    switch_tab(&app, &cookie, "map").await;
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("XP: 0"));

    for _ in 0..2 {
        actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/map/scan")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
    }
    let body = fetch_index(&app, &cookie).await;
    assert!(body.contains("XP: 100"));
}

async fn open_session<S, B>(app: &S) -> Cookie<'static>
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let response =
        actix_test::call_service(app, actix_test::TestRequest::get().uri("/").to_request()).await;
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.into_owned())
        .expect("session cookie")
}

async fn fetch_index<S, B>(app: &S, cookie: &Cookie<'static>) -> String
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
    B::Error: std::fmt::Debug,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::get()
            .uri("/")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

async fn switch_tab<S, B>(app: &S, cookie: &Cookie<'static>, tab: &str)
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let response = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/session/tab")
            .cookie(cookie.clone())
            .set_form([("tab", tab)])
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
