use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_player::player::RandomPolicy;
use video_player::{load_catalog, shell, PlayerConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Browse, play and curate a video catalog", long_about = None)]
struct Args {
    /// Path to the video catalog (one `title | id | #tags` entry per line)
    #[arg(short = 'c', long, default_value = "data/videos.txt")]
    catalog: PathBuf,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only pick unflagged videos for PLAY_RANDOM
    #[arg(long)]
    playable_random: bool,

    /// Reason recorded when FLAG_VIDEO is given none
    #[arg(long, default_value = video_player::player::DEFAULT_FLAG_REASON)]
    flag_reason: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let policy = if args.playable_random {
        RandomPolicy::PlayableOnly
    } else {
        RandomPolicy::AnyVideo
    };
    let config = PlayerConfig::new(args.catalog)
        .with_flag_reason(args.flag_reason)
        .with_random_policy(policy);

    let library = load_catalog(&config.catalog_path)?;
    let mut player = VideoPlayer::new(config, library);

    let stdin = io::stdin();
    shell::run(&mut player, stdin.lock(), io::stdout().lock())?;

    log::debug!("Session ended");
    Ok(())
}
