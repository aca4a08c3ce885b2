use actix_files::Files;
use actix_web::{
    get, middleware,
    web::{self, Data},
    App, HttpResponse, HttpServer, Responder,
};
use askama::Template;
use awc::Client;
use log::info;
use serde::Deserialize;

use std::env::{set_var, var};

mod controller;
mod convert;
mod error;
mod fetch;
mod state;
mod templates;
mod validate;

use state::{InFlight, ViewState};

#[derive(Deserialize)]
struct RenderQuery {
    url: Option<String>,
}

fn page(state: ViewState) -> HttpResponse {
    match state {
        ViewState::Idle => HttpResponse::Ok()
            .content_type("text/html")
            .body(templates::Index.render().unwrap()),
        ViewState::Busy => HttpResponse::TooManyRequests()
            .content_type("text/html")
            .body(templates::Busy.render().unwrap()),
        ViewState::Done { html } => HttpResponse::Ok()
            .content_type("text/html")
            .body(templates::Document { html }.render().unwrap()),
        ViewState::Failed { error } => HttpResponse::build(error.status())
            .content_type("text/html")
            .body(
                templates::ErrorPage {
                    message: error.to_string(),
                }
                .render()
                .unwrap(),
            ),
    }
}

#[get("/")]
async fn index() -> impl Responder {
    page(ViewState::Idle)
}

#[get("/render")]
async fn render_document(
    query: web::Query<RenderQuery>,
    client: Data<Client>,
    in_flight: Data<InFlight>,
) -> impl Responder {
    // The shared flag carries the Busy state between requests; each request
    // itself submits from a settled page.
    let _guard = match in_flight.begin() {
        Some(guard) => guard,
        None => return page(ViewState::Busy),
    };

    let state = match ViewState::Idle.submit() {
        Some(state) => state,
        None => return page(ViewState::Busy),
    };

    let input = query.url.as_deref().unwrap_or("");
    let outcome = controller::submit(input, move |url| async move {
        fetch::fetch_markdown(&url, client).await
    })
    .await;

    page(state.finish(outcome))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let bind = var("LISTEN_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:7575"));
    // Shared across workers so a second submit is refused no matter which
    // worker picks it up.
    let in_flight = Data::new(InFlight::default());

    info!("Listening on {}", bind);

    HttpServer::new(move || {
        let client = Client::builder()
            .wrap(awc::middleware::Redirect::new())
            .finish();

        App::new()
            .app_data(in_flight.clone())
            .app_data(Data::new(client))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "./static"))
            .service(index)
            .service(render_document)
    })
    .bind(&bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{
        http::StatusCode,
        test::{call_and_read_body, call_service, init_service, TestRequest},
    };

    macro_rules! test_app {
        ($in_flight:expr) => {
            init_service(
                App::new()
                    .app_data($in_flight.clone())
                    .app_data(Data::new(Client::default()))
                    .service(index)
                    .service(render_document),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_index_serves_the_form() {
        let app = test_app!(Data::new(InFlight::default()));

        let response = call_service(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_render_rejects_non_markdown_url() {
        let app = test_app!(Data::new(InFlight::default()));

        let request = TestRequest::get()
            .uri("/render?url=https://example.com/page.html")
            .to_request();
        let response = call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let request = TestRequest::get()
            .uri("/render?url=https://example.com/page.html")
            .to_request();
        let body = call_and_read_body(&app, request).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("valid Markdown file"));
        assert!(body.contains("Reset"));
    }

    #[actix_web::test]
    async fn test_render_refused_while_a_cycle_runs() {
        let in_flight = Data::new(InFlight::default());
        let app = test_app!(in_flight);

        let guard = in_flight.begin();
        let request = TestRequest::get()
            .uri("/render?url=https://example.com/README.md")
            .to_request();
        let response = call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        // Released again, the next cycle proceeds to validation as usual.
        drop(guard);
        let request = TestRequest::get()
            .uri("/render?url=not-markdown")
            .to_request();
        let response = call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
