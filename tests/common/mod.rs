//! Shared utilities for integration testing.

use std::net::SocketAddr;

use https_switcher::config::AppConfig;
use https_switcher::HttpServer;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running switcher server; dropping the handle shuts it down.
pub struct TestServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a switcher server on an ephemeral port.
pub async fn start_server(website_url: &str, configure: impl FnOnce(&mut AppConfig)) -> TestServer {
    let mut config = AppConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.switcher.website_url = website_url.to_string();
    configure(&mut config);

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server
            .run(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    TestServer {
        addr,
        _shutdown: tx,
    }
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn location(res: &reqwest::Response) -> Option<&str> {
    res.headers()
        .get(reqwest::header::LOCATION)
        .and_then(|v| v.to_str().ok())
}
