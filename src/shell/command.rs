//! Shell command parsing

use std::str::FromStr;
use thiserror::Error;

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowPlaylist { name: String },
    ShowAllPlaylists,
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}")]
    Unknown(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    Arity {
        command: String,
        expected: usize,
        got: usize,
    },
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandParseError::Empty)?.to_uppercase();
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match verb.as_str() {
            "NUMBER_OF_VIDEOS" => {
                expect_args(&verb, &args, 0)?;
                Command::NumberOfVideos
            }
            "SHOW_ALL_VIDEOS" => {
                expect_args(&verb, &args, 0)?;
                Command::ShowAllVideos
            }
            "PLAY" => {
                let [video_id] = take_args::<1>(&verb, args)?;
                Command::Play { video_id }
            }
            "PLAY_RANDOM" => {
                expect_args(&verb, &args, 0)?;
                Command::PlayRandom
            }
            "STOP" => {
                expect_args(&verb, &args, 0)?;
                Command::Stop
            }
            "PAUSE" => {
                expect_args(&verb, &args, 0)?;
                Command::Pause
            }
            "CONTINUE" => {
                expect_args(&verb, &args, 0)?;
                Command::Continue
            }
            "SHOW_PLAYING" => {
                expect_args(&verb, &args, 0)?;
                Command::ShowPlaying
            }
            "CREATE_PLAYLIST" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::CreatePlaylist { name }
            }
            "ADD_TO_PLAYLIST" => {
                let [name, video_id] = take_args::<2>(&verb, args)?;
                Command::AddToPlaylist { name, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [name, video_id] = take_args::<2>(&verb, args)?;
                Command::RemoveFromPlaylist { name, video_id }
            }
            "CLEAR_PLAYLIST" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::ClearPlaylist { name }
            }
            "DELETE_PLAYLIST" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::DeletePlaylist { name }
            }
            "SHOW_PLAYLIST" => {
                let [name] = take_args::<1>(&verb, args)?;
                Command::ShowPlaylist { name }
            }
            "SHOW_ALL_PLAYLISTS" => {
                expect_args(&verb, &args, 0)?;
                Command::ShowAllPlaylists
            }
            "SEARCH_VIDEOS" => {
                let [term] = take_args::<1>(&verb, args)?;
                Command::SearchVideos { term }
            }
            "SEARCH_VIDEOS_WITH_TAG" => {
                let [tag] = take_args::<1>(&verb, args)?;
                Command::SearchVideosWithTag { tag }
            }
            "FLAG_VIDEO" => {
                // Everything after the id is the reason
                let mut args = args.into_iter();
                let video_id = args.next().ok_or_else(|| CommandParseError::Arity {
                    command: verb.clone(),
                    expected: 1,
                    got: 0,
                })?;
                let reason = args.collect::<Vec<_>>().join(" ");
                Command::FlagVideo {
                    video_id,
                    reason: (!reason.is_empty()).then_some(reason),
                }
            }
            "ALLOW_VIDEO" => {
                let [video_id] = take_args::<1>(&verb, args)?;
                Command::AllowVideo { video_id }
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(CommandParseError::Unknown(verb)),
        };

        Ok(command)
    }
}

fn expect_args(verb: &str, args: &[String], expected: usize) -> Result<(), CommandParseError> {
    if args.len() != expected {
        return Err(CommandParseError::Arity {
            command: verb.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn take_args<const N: usize>(verb: &str, args: Vec<String>) -> Result<[String; N], CommandParseError> {
    let got = args.len();
    args.try_into().map_err(|_| CommandParseError::Arity {
        command: verb.to_string(),
        expected: N,
        got,
    })
}

/// Text printed by the HELP command
pub const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
