//! The smallest possible app: one tagged route, driven through the stub
//! adapter.

use http::Method;
use std::error::Error;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use wren_web::{handler_fn, App, Request, Response, RouteArgs, ServerAdapter, ServerConfig, StubAdapter};

fn hello(_req: &Request, args: &RouteArgs) -> Option<Response> {
    let mut res = Response::new();
    res.add_body(format!("<b>Hello {}!</b>", args.get("name")?));
    Some(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = Arc::new(App::builder().handler("/hello/:name", handler_fn(hello)).build()?);

    let config = ServerConfig::default();
    let mut adapter = StubAdapter::new(app, &config);
    adapter.run()?;

    let response = adapter.feed(&Request::new(Method::GET, "/hello/world"));
    println!("{} {}", response.status(), String::from_utf8_lossy(&response.body_bytes()));

    adapter.stop();
    Ok(())
}
