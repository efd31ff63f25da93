#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::time::Duration;

    use axum::Router;
    use dnsarc_api::{AppState, SessionCookie};
    use dnsarc_client::HttpTransport;
    use dnsarc_ui::{shell, App};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: api={} nameservers={}",
        appConfig.api.base_url,
        appConfig.dns.nameservers.join(",")
    );

    let transport = HttpTransport::new(
        &appConfig.api.base_url,
        Duration::from_secs(appConfig.api.timeout_secs),
    )
    .unwrap_or_else(|e| panic!("failed to build API client: {e}"));

    let appState = AppState {
        transport,
        session_cookie: SessionCookie::new(
            appConfig.session.cookie_name.clone(),
            appConfig.session.secure,
            appConfig.session.max_age_hours,
        ),
        nameservers: appConfig.dns.nameservers.clone(),
    };

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let mut leptosOptions = conf.leptos_options;
    let addr = appConfig.addr();
    leptosOptions.site_addr = addr
        .parse()
        .unwrap_or_else(|e| panic!("invalid bind address {addr}: {e}"));

    let routes = generate_route_list(App);
    let apiRouter = dnsarc_api::api_router(appState.clone());
    let pageAuthLayer = axum::middleware::from_fn_with_state(
        appState.clone(),
        dnsarc_api::middleware::auth::require_page_auth,
    );

    // Server functions reach the remote API through the AppState in context.
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let appState = appState.clone();
                move || provide_context(appState.clone())
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .merge(apiRouter)
        .layer(pageAuthLayer)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
