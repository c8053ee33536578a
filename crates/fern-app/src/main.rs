mod app;
mod cli;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use fern_common::events::Event;
use fern_common::types::ProfileId;
use fern_stats::{DashboardView, StatsClient, StatsDashboard};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config (before tracing init so the directive can come from it;
    // load-time diagnostics are repeated below once logging is up)
    let mut config = match args.config {
        Some(ref path) => fern_config::load_from_path(std::path::Path::new(path)),
        None => fern_config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("fern: config load failed, using defaults: {e}");
        fern_config::FernConfig::default()
    });

    if let Some(ref base_url) = args.base_url {
        config.api.base_url = base_url.clone();
    }

    // Initialize logging: CLI flag > config > built-in default
    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.directive);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "fern=info".parse().expect("static directive")),
            ),
        )
        .init();

    tracing::info!("Fern v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::info!(base_url = %config.api.base_url, "Config loaded");

    // Build the session
    let profile = args.profile.clone().map(ProfileId);
    let mut app = app::FernApp::new(config, profile, args.staff);

    // Route-driven modal triggers (deep links)
    if let Some(ref route) = args.route {
        app.apply_route(route);
    }
    for modal in app.arbiter.presented() {
        tracing::info!(overlay = ?modal.kind, title = ?modal.title, "overlay presented");
    }

    // The stats dashboard is staff-only
    if !app.staff.can_view_staff_tools() {
        tracing::info!("staff tools unavailable for this session (need --profile and --staff)");
        return;
    }

    let client = Arc::new(StatsClient::new(&app.config.api, &app.config.polling));
    let mut dashboard = StatsDashboard::start(client, &app.config.polling);
    tracing::info!(
        stats_interval_ms = app.config.polling.stats_interval_ms,
        profiles_interval_ms = app.config.polling.profiles_interval_ms,
        "Stats dashboard started"
    );

    // Render loop: re-compose once per second until ctrl-c
    let mut render_tick = tokio::time::interval(Duration::from_secs(1));
    let mut last_view: Option<DashboardView> = None;
    let mut last_profiles = 0u64;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown requested");
                break;
            }
            _ = render_tick.tick() => {
                let view = dashboard.snapshot();
                if last_view.as_ref() != Some(&view) {
                    app.event_bus.publish(Event::StatsUpdated);
                    render(&view);
                    last_view = Some(view);
                }
                let profiles = dashboard.total_profiles();
                if profiles != last_profiles {
                    app.event_bus.publish(Event::ProfileCountUpdated(profiles));
                    last_profiles = profiles;
                }
            }
        }
    }

    dashboard.shutdown();
    dashboard.join().await;
    app.event_bus.publish(Event::Shutdown);
    tracing::info!("Shutdown complete");
}

/// Log the current dashboard view.
fn render(view: &DashboardView) {
    match view {
        DashboardView::Loading => {
            tracing::info!("Loading stats...");
        }
        DashboardView::Error(error) => {
            tracing::warn!(%error, "Failed to load stats");
        }
        DashboardView::Ready(snapshot) => {
            tracing::info!(
                events_last_60s = %snapshot.events.last_60_seconds,
                events_today = %snapshot.events.today,
                events_all_time = %snapshot.events.all_time,
                impressions_last_60s = %snapshot.impressions.last_60_seconds,
                impressions_today = %snapshot.impressions.today,
                impressions_all_time = %snapshot.impressions.all_time,
                active_user_days = snapshot.active_users.len(),
                total_profiles = snapshot.total_profiles,
                "Dashboard"
            );
        }
    }
}
