// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! Cadence - a playlist with a play cursor that survives edits.
//!
//! # Quick Start
//!
//! ```
//! use cadence::playlist::Playlist;
//!
//! let mut playlist = Playlist::new().with_seed(7);
//! playlist.add_track("Banana", 10);
//! playlist.add_track("Apple", 5);
//! playlist.add_track("Cherry", 7);
//!
//! // The first track added is the current one.
//! assert_eq!(playlist.current().unwrap().title(), "Banana");
//!
//! playlist.sort();
//! let titles: Vec<_> = playlist.tracks().map(|t| t.title()).collect();
//! assert_eq!(titles, ["Apple", "Banana", "Cherry"]);
//!
//! // Sorting moves values, not nodes: the cursor still sits on the first node.
//! assert_eq!(playlist.current().unwrap().title(), "Apple");
//!
//! // Removing the current track moves playback to the next one.
//! playlist.remove_track("Apple");
//! assert_eq!(playlist.current().unwrap().title(), "Banana");
//! ```

mod error;
pub mod list;
pub mod playlist;
pub mod track;

pub use error::Error;
pub use error::Result;
pub use list::NodeId;
pub use list::Sequence;
pub use playlist::Notice;
pub use playlist::Notify;
pub use playlist::Playlist;
pub use track::Track;
