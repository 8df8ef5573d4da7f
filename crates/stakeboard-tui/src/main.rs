//! Stakeboard - terminal dashboard for a staking account.

mod app;
mod event;
mod theme;
mod tui;
mod ui;

use app::App;
use clap::Parser;
use color_eyre::Result;
use event::{Event, EventHandler};
use stakeboard_core::{DashboardSource, SampleSource, compose};
use theme::Theme;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tui::Tui;

/// Account staking dashboard - activity, pools, and voting history.
#[derive(Parser, Debug)]
#[command(name = "stakeboard")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color theme: auto, dark, or light
    #[arg(short, long, default_value = "auto")]
    theme: ThemeArg,

    /// Print the composed dashboard as JSON and exit
    #[arg(long)]
    json: bool,
}

/// Theme argument that can be parsed from string.
#[derive(Debug, Clone, Copy)]
enum ThemeArg {
    Auto,
    Dark,
    Light,
}

impl ThemeArg {
    fn resolve(self) -> Theme {
        match self {
            ThemeArg::Auto => Theme::detect(),
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

impl std::str::FromStr for ThemeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeArg::Auto),
            "dark" => Ok(ThemeArg::Dark),
            "light" => Ok(ThemeArg::Light),
            other => Err(format!(
                "unknown theme `{other}` (expected auto, dark, or light)"
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("stakeboard=info".parse()?)
        .add_directive("stakeboard_core=info".parse()?);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data = SampleSource.load();
    let view = compose(&data)?;
    tracing::info!(
        "Composed dashboard for {} ({} activity, {} stakes, {} votes)",
        view.header.identity.address,
        view.activity.len(),
        view.stakes.len(),
        view.votes.len()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let palette = args.theme.resolve().palette();
    let mut app = App::new(view, palette);
    let mut tui = Tui::enter()?;
    let mut events = EventHandler::new(250);

    while !app.should_quit {
        tui.draw(|frame| ui::render(frame, &mut app))?;
        match events.next().await? {
            Event::Tick => {}
            Event::Key(key) => app.handle_key(key),
            Event::Resize(_, _) => {}
        }
    }

    Ok(())
}
