use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlalbum::{cli, config, error};

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
    /// Access token to use instead of SPOTIFY_ACCESS_TOKEN or the cached token
    #[clap(long, global = true)]
    token: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show an album and its tracks
    Album(AlbumOptions),

    /// Play an album, optionally starting at one of its tracks
    Play(PlayOptions),

    /// Follow an album
    Follow(FollowOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    /// Album id, `spotify:album:` URI, album link or `/album/{id}` route
    pub album: String,

    /// Track id or URI to emphasize in the listing
    #[clap(long)]
    pub highlight: Option<String>,

    /// Number of track pages to show
    #[clap(long, conflicts_with = "all")]
    pub pages: Option<u32>,

    /// Load every page of tracks
    #[clap(long)]
    pub all: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlayOptions {
    /// Album id, `spotify:album:` URI, album link or `/album/{id}` route
    pub album: String,

    /// Track id or URI to start playback at
    #[clap(long)]
    pub track: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct FollowOptions {
    pub album: String,
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
        Command::Album(opt) => {
            cli::album(opt.album, opt.highlight, opt.pages, opt.all, cli.token).await
        }
        Command::Play(opt) => cli::play(opt.album, opt.track, cli.token).await,
        Command::Follow(opt) => cli::follow(opt.album).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
