use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodlist::{cli, config, error, types::PlaylistRequest};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Link a Spotify account
    Auth,

    /// Generate a playlist from mood preferences
    Generate(GenerateOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateOptions {
    /// Mood driving the playlist (e.g. energico, relaxado, feliz)
    #[clap(long)]
    pub mood: Option<String>,

    /// Preferred genre; can be repeated
    #[clap(long = "genre")]
    pub genres: Vec<String>,

    /// Era to draw from (e.g. anos-80)
    #[clap(long)]
    pub era: Option<String>,

    /// Free-text additional preferences for the model
    #[clap(long)]
    pub preferences: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let cfg = match config::Config::from_env() {
                Ok(cfg) => Arc::new(cfg),
                Err(e) => error!("{}", e),
            };
            cli::auth(cfg).await;
        }
        Command::Generate(opt) => {
            let cfg = match config::Config::from_env() {
                Ok(cfg) => Arc::new(cfg),
                Err(e) => error!("{}", e),
            };
            let request = PlaylistRequest {
                mood: opt.mood.unwrap_or_default(),
                genres: opt.genres,
                era: opt.era.unwrap_or_default(),
                additional_preferences: opt.preferences.unwrap_or_default(),
            };
            cli::generate(cfg, request).await;
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
