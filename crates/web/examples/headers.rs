//! Echoes the request headers back, with the same handler aliased under two
//! routes.

use http::Method;
use std::error::Error;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wren_web::{handler_fn, App, Request, Response, RouteArgs, ServerAdapter, ServerConfig, StubAdapter};

fn headers(req: &Request, _args: &RouteArgs) -> Option<Response> {
    let mut res = Response::new();
    res.add_body("<p>");
    for index in 0..req.header_count() {
        if let Some((name, value)) = req.header_at(index) {
            res.add_body(format!("{name}:{value}<br/>"));
        }
    }
    res.add_body("</p>");
    Some(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = Arc::new(App::builder().handler("/headers", handler_fn(headers)).alias("/").build()?);

    let config = ServerConfig::default();
    let mut adapter = StubAdapter::new(app, &config);
    adapter.run()?;

    let request = Request::new(Method::GET, "/")
        .with_header("Host", "localhost:8080")?
        .with_header("User-Agent", "wren-demo")?;
    let response = adapter.feed(&request);
    println!("{} {}", response.status(), String::from_utf8_lossy(&response.body_bytes()));

    adapter.stop();
    Ok(())
}
