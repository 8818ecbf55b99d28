use intern_portal::{load_slots, resolve_data_dir, router, AppState};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    let slots = load_slots(&data_dir).await;
    info!(
        "user data: {}",
        if slots.user.is_some() { "Loaded" } else { "Using fallback" }
    );
    info!(
        "leaderboard data: {}",
        if slots.leaderboard.is_some() { "Loaded" } else { "Using fallback" }
    );

    let state = AppState::new(data_dir, slots);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
