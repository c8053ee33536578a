use clap::Parser;

/// Fern — social client coordination core with a staff stats dashboard.
#[derive(Parser, Debug)]
#[command(name = "fern", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log directive override (e.g. "fern=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// API base URL override.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Startup route / deep link (e.g. "/?signup=true").
    #[arg(long)]
    pub route: Option<String>,

    /// Profile id of the logged-in session, if any.
    #[arg(long)]
    pub profile: Option<String>,

    /// Enable staff mode (required for the stats dashboard).
    #[arg(long)]
    pub staff: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
