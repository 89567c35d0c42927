//! Integration tests for serving over a real socket.

use std::sync::Arc;

use kinship_client::StaticPeopleSource;
use kinship_web::{Server, ServerConfig};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::common::family;

#[tokio::test]
async fn test_server_serves_people_and_shuts_down() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let server = Server::new(
        ServerConfig {
            host: addr.ip().to_string(),
            port: addr.port(),
        },
        Arc::new(StaticPeopleSource::new(family())),
    );
    let handle = tokio::spawn(server.serve(listener, async move {
        let _ = stop_rx.await;
    }));

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    let resp = client
        .get(format!("http://{addr}/people/emma-haverbeke-1860"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
    let body = resp.text().await.unwrap();
    assert!(body.contains("has-background-warning"));

    let resp = client.get(format!("http://{addr}/home")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 308);

    let resp = client.get(format!("http://{addr}/health")).send().await.unwrap();
    assert_eq!(resp.text().await.unwrap(), "OK");

    stop_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
