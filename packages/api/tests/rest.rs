//! End to end: Rest over HyperTransport against a local axum server

use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode as AxumStatus;
use axum::routing::{get, post};
use eddy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Ticket {
    id: u64,
    title: String,
}

#[derive(Deserialize)]
struct Filter {
    title: String,
}

async fn serve() -> SocketAddr {
    let app = Router::new()
        .route(
            "/tickets/:id",
            get(|Path(id): Path<u64>| async move {
                if id == 1 {
                    Ok(Json(Ticket {
                        id,
                        title: "printer on fire".to_string(),
                    }))
                } else {
                    Err(AxumStatus::NOT_FOUND)
                }
            }),
        )
        .route(
            "/tickets",
            post(|Query(filter): Query<Filter>, Json(ticket): Json<Ticket>| async move {
                (
                    AxumStatus::CREATED,
                    Json(Ticket {
                        id: ticket.id + 100,
                        title: format!("{} ({})", ticket.title, filter.title),
                    }),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

async fn client() -> Rest {
    env_logger::try_init().ok();
    let addr = serve().await;
    Rest::builder()
        .base_url(format!("http://{addr}"))
        .default_header("x-client", "eddy-tests")
        .build()
        .expect("valid client")
}

#[tokio::test]
async fn routes_a_json_success() {
    let rest = client().await;

    let ticket = rest
        .get("/tickets/1")
        .debug()
        .dispatch(selector::series(), [
            on(Series::Successful)
                .dispatch(selector::content_type(), [
                    on(mime::APPLICATION_JSON).typed::<Ticket>().capture(),
                ])
                .expect("nested tree"),
        ])
        .capture::<Ticket>()
        .await
        .expect("ticket");

    assert_eq!(
        ticket,
        Some(Ticket {
            id: 1,
            title: "printer on fire".to_string()
        })
    );
}

#[tokio::test]
async fn missing_resource_is_no_route() {
    let rest = client().await;

    let error = rest
        .get("/tickets/2")
        .dispatch(selector::series(), [on(Series::Successful).capture()])
        .await
        .unwrap_err();

    assert!(error.is_no_route());
    assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn posts_a_json_body() {
    let rest = client().await;

    let created = rest
        .post("/tickets")
        .query_param("title", "urgent")
        .body(&Ticket {
            id: 5,
            title: "jammed".to_string(),
        })
        .dispatch(selector::status(), [
            on(StatusCode::CREATED)
                .typed::<Ticket>()
                .capture_with(|entity| Ok((entity.status(), entity.into_body().title))),
        ])
        .capture::<(StatusCode, String)>()
        .await
        .expect("created");

    assert_eq!(
        created,
        Some((StatusCode::CREATED, "jammed (urgent)".to_string()))
    );
}
