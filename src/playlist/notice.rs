// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Notifications a [`Playlist`](super::Playlist) sends to its front end.

use std::fmt;

use crate::track::Track;

/// Something the user should be told about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Added { title: String },
    Removed { title: String },
    /// A removal asked for a title the playlist does not hold.
    NotInPlaylist { title: String },
    Found { title: String },
    NotFound { title: String },
    NowPlaying(Track),
    NothingPlaying,
    Listing(Vec<Track>),
    Sorted,
    Shuffled,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Notice::Added { title } => write!(f, "\"{}\" added to the playlist.", title),
            Notice::Removed { title } => write!(f, "\"{}\" removed from the playlist.", title),
            Notice::NotInPlaylist { title } => {
                write!(f, "\"{}\" is not in the playlist. Fail to remove.", title)
            }
            Notice::Found { title } => write!(f, "Track \"{}\" found in the playlist!", title),
            Notice::NotFound { title } => {
                write!(f, "Track \"{}\" NOT found in the playlist!", title)
            }
            Notice::NowPlaying(track) => write!(
                f,
                "Now playing: \"{}\" Duration: {} seconds.",
                track.title(),
                track.duration()
            ),
            Notice::NothingPlaying => f.write_str("Playlist is empty, NOT playing any track now."),
            Notice::Listing(tracks) => {
                f.write_str("Playlist:")?;
                for track in tracks {
                    write!(f, "\n{}", track)?;
                }
                Ok(())
            }
            Notice::Sorted => f.write_str("Playlist sorted by track titles."),
            Notice::Shuffled => f.write_str("Playlist shuffled randomly."),
        };
    }
}

/// A sink for notices. The playlist never reads anything back.
pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

/// Discard everything.
impl Notify for () {
    fn notify(&mut self, _notice: Notice) {}
}

/// Collect notices in order, mostly useful in tests.
impl Notify for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
