//! Interactive command shell
//!
//! Reads one command per line, runs it against a `VideoPlayer` and
//! writes the resulting report. Search commands read one extra line
//! to pick a result to play.

mod command;

pub use command::{Command, CommandParseError, HELP_TEXT};

use crate::catalog::Catalog;
use crate::player::{Report, SearchOutcome, VideoPlayer};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const PROMPT: &str = "YT> ";
pub const GREETING: &str = "Hello and welcome to YouTube, what would you like to do?";
pub const FAREWELL: &str = "YouTube has now terminated its execution. Thank you and goodbye!";
pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// What a command produced
enum Outcome {
    Done(Report),
    Select(SearchOutcome),
}

/// Run commands from `input` until EXIT or end of input
pub fn run<C, R, W>(player: &mut VideoPlayer<C>, input: R, mut output: W) -> Result<()>
where
    C: Catalog,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(Command::Exit) => break,
            Ok(command) => command,
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                writeln!(output, "{}", INVALID_COMMAND)?;
                continue;
            }
        };

        match execute(player, command) {
            Outcome::Done(report) => write!(output, "{}", report)?,
            Outcome::Select(search) => {
                write!(output, "{}", search.report)?;
                if !search.has_results() {
                    continue;
                }
                output.flush()?;

                // End of input declines the offer
                let answer = match lines.next() {
                    Some(answer) => answer.context("Failed to read search selection")?,
                    None => String::new(),
                };
                write!(output, "{}", player.play_selection(&search, &answer))?;
            }
        }
    }

    writeln!(output, "{}", FAREWELL)?;
    output.flush()?;
    Ok(())
}

fn execute<C: Catalog>(player: &mut VideoPlayer<C>, command: Command) -> Outcome {
    let report = match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play { video_id } => player.play_video(&video_id),
        Command::PlayRandom => player.play_random_video(),
        Command::Stop => player.stop_video(),
        Command::Pause => player.pause_video(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => player.show_playing(),
        Command::CreatePlaylist { name } => player.create_playlist(&name),
        Command::AddToPlaylist { name, video_id } => player.add_to_playlist(&name, &video_id),
        Command::RemoveFromPlaylist { name, video_id } => {
            player.remove_from_playlist(&name, &video_id)
        }
        Command::ClearPlaylist { name } => player.clear_playlist(&name),
        Command::DeletePlaylist { name } => player.delete_playlist(&name),
        Command::ShowPlaylist { name } => player.show_playlist(&name),
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::SearchVideos { term } => return Outcome::Select(player.search_videos(&term)),
        Command::SearchVideosWithTag { tag } => {
            return Outcome::Select(player.search_videos_with_tag(&tag))
        }
        Command::FlagVideo { video_id, reason } => player.flag_video(&video_id, reason.as_deref()),
        Command::AllowVideo { video_id } => player.allow_video(&video_id),
        Command::Help => Report::line(HELP_TEXT),
        // Handled by the loop
        Command::Exit => Report::new(),
    };
    Outcome::Done(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Video, VideoLibrary};
    use crate::player::PlayerConfig;

    fn session(script: &str) -> (VideoPlayer<VideoLibrary>, String) {
        let library = vec![
            Video::new("v1", "Amazing Cat", vec!["cat".to_string()]),
            Video::new("v2", "Boring Dog", vec!["dog".to_string()]),
        ]
        .into_iter()
        .collect();
        let mut player = VideoPlayer::new(PlayerConfig::default(), library);
        let mut output = Vec::new();
        run(&mut player, script.as_bytes(), &mut output).unwrap();
        (player, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_greeting_and_farewell() {
        let (_, output) = session("EXIT\n");
        assert!(output.starts_with(GREETING));
        assert!(output.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_invalid_command() {
        let (_, output) = session("DANCE\nPLAY\n");
        assert_eq!(output.matches(INVALID_COMMAND).count(), 2);
    }

    #[test]
    fn test_commands_run_in_order() {
        let (player, output) = session("play v1\nPAUSE\nSHOW_PLAYING\nEXIT\nPLAY v2\n");

        assert!(output.contains("Playing video: Amazing Cat\n"));
        assert!(output.contains("Pausing video: Amazing Cat\n"));
        assert!(output.contains("Currently playing: Amazing Cat (v1) [cat] - PAUSED\n"));
        assert!(!output.contains("Boring Dog"));
        assert!(player.playback().is_paused());
    }

    #[test]
    fn test_search_selection_plays_video() {
        let (player, output) = session("SEARCH_VIDEOS_WITH_TAG cat\n1\n");

        assert!(output.contains("  1) Amazing Cat (v1) [cat]\n"));
        assert!(output.contains("Playing video: Amazing Cat\n"));
        assert_eq!(player.playback().video_id(), Some("v1"));
    }

    #[test]
    fn test_search_selection_declined() {
        let (player, _) = session("SEARCH_VIDEOS cat\n9\nSEARCH_VIDEOS dog\nno\n");
        assert!(player.playback().video_id().is_none());

        // Input ending at the prompt is a "no" as well
        let (player, _) = session("SEARCH_VIDEOS cat\n");
        assert!(player.playback().video_id().is_none());
    }

    #[test]
    fn test_search_without_results_reads_no_answer() {
        let (player, output) = session("SEARCH_VIDEOS horse\nPLAY v2\n");
        assert!(output.contains("No search results for horse\n"));
        assert_eq!(player.playback().video_id(), Some("v2"));
    }
}
