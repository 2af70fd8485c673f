//! `IgcClient::fetch` against a local HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use paragliding_igc::{FetchError, IgcClient, IgcError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const FLIGHT_IGC: &str = "AXCT001\n\
    HFDTE190216\n\
    HFPLTPILOTINCHARGE:Jo\n\
    HFGTYGLIDERTYPE:RV8\n\
    HFGIDGLIDERID:EC-XLL\n\
    B1100000000000N00000000EA0010000100\n\
    B1101000100000N00000000EA0010000100\n";

/// An IGC file padded with `L` (comment) records to at least `bytes`.
fn padded_igc(bytes: usize) -> String {
    let mut text = FLIGHT_IGC.to_string();
    while text.len() < bytes {
        text.push_str("LXXXpadding comment record\n");
    }
    text
}

/// Serve `app` on an ephemeral local port.
async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn test_app() -> Router {
    Router::new()
        .route("/flight.igc", get(|| async { FLIGHT_IGC }))
        .route("/index.html", get(|| async { "<html><body>hello</body></html>" }))
        .route("/big.igc", get(|| async { padded_igc(64 * 1024) }))
        .route(
            "/slow.igc",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                FLIGHT_IGC
            }),
        )
        .route(
            "/broken.igc",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
}

fn client() -> IgcClient {
    IgcClient::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_and_parses_igc_body() {
    let addr = serve(test_app()).await;

    let track = client()
        .fetch(&format!("http://{addr}/flight.igc"))
        .await
        .unwrap();

    assert_eq!(track.pilot, "Jo");
    assert_eq!(track.glider_type, "RV8");
    assert_eq!(track.fixes.len(), 2);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let addr = serve(test_app()).await;

    assert_matches!(
        client().fetch(&format!("http://{addr}/missing.igc")).await,
        Err(FetchError::Status { status: 404, .. })
    );
    assert_matches!(
        client().fetch(&format!("http://{addr}/broken.igc")).await,
        Err(FetchError::Status { status: 500, .. })
    );
}

#[tokio::test]
async fn non_igc_body_is_a_parse_error() {
    let addr = serve(test_app()).await;

    assert_matches!(
        client().fetch(&format!("http://{addr}/index.html")).await,
        Err(FetchError::Parse(IgcError::NotIgc))
    );
}

#[tokio::test]
async fn slow_server_times_out() {
    let addr = serve(test_app()).await;
    let client = IgcClient::new(Duration::from_millis(200)).unwrap();

    let err = client
        .fetch(&format!("http://{addr}/slow.igc"))
        .await
        .unwrap_err();
    assert_matches!(err, FetchError::Request(e) if e.is_timeout());
}

#[tokio::test]
async fn body_over_declared_limit_is_rejected() {
    let addr = serve(test_app()).await;
    let url = format!("http://{addr}/big.igc");

    assert_matches!(
        client().with_max_body_bytes(16 * 1024).fetch(&url).await,
        Err(FetchError::TooLarge { limit: 16384, .. })
    );
    // The same file is accepted under a larger limit.
    assert!(client().with_max_body_bytes(128 * 1024).fetch(&url).await.is_ok());
}

#[tokio::test]
async fn body_without_content_length_is_capped_while_streaming() {
    // A close-delimited response carries no Content-Length, so the limit
    // can only be enforced on the bytes actually received.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{}",
            padded_igc(64 * 1024)
        );
        // The client hangs up once the limit is exceeded.
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    assert_matches!(
        client()
            .with_max_body_bytes(4 * 1024)
            .fetch(&format!("http://{addr}/stream.igc"))
            .await,
        Err(FetchError::TooLarge { limit: 4096, .. })
    );
}
