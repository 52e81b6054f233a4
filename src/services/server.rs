use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::TournamentSource;
use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::services::pipeline::LeaderboardService;

pub struct ServerService<S> {
    port: u16,
    refresh_interval: Duration,
    state: Arc<AppState>,
    leaderboard: Arc<LeaderboardService<S>>,
}

impl<S: TournamentSource> ServerService<S> {
    pub fn new(port: u16, refresh_interval: Duration, state: AppState, leaderboard: LeaderboardService<S>) -> Self {
        Self {
            port,
            refresh_interval,
            state: Arc::new(state),
            leaderboard: Arc::new(leaderboard),
        }
    }

    pub async fn run(&self) -> Result<()> {
        self.spawn_refresh_loop();

        let app = create_router(Arc::clone(&self.state))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Recompute on a fixed interval; the first tick fires immediately
    fn spawn_refresh_loop(&self) {
        let state = Arc::clone(&self.state);
        let leaderboard = Arc::clone(&self.leaderboard);
        let period = self.refresh_interval;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let snapshot = leaderboard.run().await;
                info!(
                    "Refreshed leaderboard: {} players, next refresh in {}s",
                    snapshot.leaderboard.len(),
                    period.as_secs()
                );
                state.publish(snapshot).await;
            }
        });
    }
}
