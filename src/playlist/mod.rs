// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

//! A playlist with a play cursor.
//!
//! The cursor is a [`NodeId`] into the track list, so it never owns a track
//! and never dangles: removing a node makes its handle stale. The playlist
//! keeps one invariant on top of that: the cursor is `None` exactly when the
//! playlist is empty.
//!
//! Sorting and shuffling move values between nodes and leave the nodes in
//! place. The cursor names a node, not a track, so after a reorder it points
//! at whatever track was moved into that node.

mod notice;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::list::shuffle::shuffle;
use crate::list::sort::sort_by;
use crate::list::Iter;
use crate::list::NodeId;
use crate::list::Sequence;
use crate::track::Track;

pub use notice::Notice;
pub use notice::Notify;

/// An ordered list of tracks plus the currently playing one.
pub struct Playlist<N: Notify = ()> {
    tracks: Sequence<Track>,
    cursor: Option<NodeId>,
    rng: StdRng,
    sink: N,
}

impl Playlist<()> {
    /// A silent playlist: notices are dropped.
    pub fn new() -> Playlist<()> {
        return Playlist::with_sink(());
    }
}

impl Default for Playlist<()> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<N: Notify> Playlist<N> {
    /// An empty playlist reporting to `sink`. Shuffles draw from entropy.
    pub fn with_sink(sink: N) -> Playlist<N> {
        return Playlist {
            tracks: Sequence::new(),
            cursor: None,
            rng: StdRng::from_entropy(),
            sink,
        };
    }

    /// Reseed the shuffle generator for reproducible permutations.
    pub fn with_seed(mut self, seed: u64) -> Playlist<N> {
        self.rng = StdRng::seed_from_u64(seed);
        return self;
    }

    pub fn sink(&self) -> &N {
        return &self.sink;
    }

    pub fn sink_mut(&mut self) -> &mut N {
        return &mut self.sink;
    }

    pub fn len(&self) -> usize {
        return self.tracks.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.tracks.is_empty();
    }

    /// Tracks in playlist order. A fresh traversal every call.
    pub fn tracks(&self) -> Iter<'_, Track> {
        return self.tracks.iter();
    }

    /// The underlying track list.
    pub fn sequence(&self) -> &Sequence<Track> {
        return &self.tracks;
    }

    /// Handle of the node under the cursor.
    pub fn cursor(&self) -> Option<NodeId> {
        return self.cursor;
    }

    /// The track under the cursor, without notifying anyone.
    pub fn current(&self) -> Option<&Track> {
        let id = self.cursor?;
        return self.tracks.get(id);
    }

    #[inline]
    fn check_cursor(&self) {
        debug_assert_eq!(self.cursor.is_none(), self.tracks.is_empty());
        debug_assert!(self.cursor.is_none_or(|id| self.tracks.get(id).is_some()));
    }

    /// Append a track. The first track added to an empty playlist becomes
    /// the current one.
    pub fn add_track(&mut self, title: impl Into<String>, duration: u32) {
        let track = Track::new(title, duration);
        let title = track.title().to_string();
        let id = self.tracks.push_back(track);
        if self.cursor.is_none() {
            self.cursor = Some(id);
        }
        self.check_cursor();

        debug!(title = %title, duration, len = self.tracks.len(), "added track");
        self.sink.notify(Notice::Added { title });
    }

    /// Remove the first track titled `title`. Returns false if there is none.
    ///
    /// If the cursor was on the removed track it moves to the next track,
    /// wraps to the first one when the removed track was last, and clears
    /// when the playlist becomes empty.
    pub fn remove_track(&mut self, title: &str) -> bool {
        return match self.take(title) {
            Some(track) => {
                debug!(title, len = self.tracks.len(), "removed track");
                self.sink.notify(Notice::Removed {
                    title: track.title().to_string(),
                });
                true
            }
            None => {
                debug!(title, "no track to remove");
                self.sink.notify(Notice::NotInPlaylist {
                    title: title.to_string(),
                });
                false
            }
        };
    }

    /// Unlink the first track titled `title`, rebinding the cursor first.
    fn take(&mut self, title: &str) -> Option<Track> {
        let id = self.tracks.find(|t| t.title() == title)?;

        // Compare handles, never the values behind them.
        if self.cursor == Some(id) {
            self.cursor = match self.tracks.next(id) {
                Some(next) => Some(next),
                None => self.tracks.first().filter(|first| *first != id),
            };
        }

        let track = self.tracks.remove_node(id);
        self.check_cursor();
        return track;
    }

    /// True if some track is titled `title`.
    pub fn search(&mut self, title: &str) -> bool {
        let found = self.tracks.find(|t| t.title() == title).is_some();
        let title = title.to_string();
        let notice = if found {
            Notice::Found { title }
        } else {
            Notice::NotFound { title }
        };
        self.sink.notify(notice);
        return found;
    }

    /// Advance to the next track, wrapping from the last to the first.
    /// With no current track, start from the first.
    pub fn play_next(&mut self) -> Option<&Track> {
        self.cursor = match self.cursor {
            None => self.tracks.first(),
            Some(id) => self.tracks.next(id).or_else(|| self.tracks.first()),
        };
        self.check_cursor();
        return self.report_current();
    }

    /// Step back to the previous track, wrapping from the first to the last.
    /// With no current track, start from the last.
    pub fn play_previous(&mut self) -> Option<&Track> {
        self.cursor = match self.cursor {
            None => self.tracks.last(),
            Some(id) => self.tracks.prev(id).or_else(|| self.tracks.last()),
        };
        self.check_cursor();
        return self.report_current();
    }

    /// Report the current track, or that nothing is playing.
    pub fn current_track(&mut self) -> Option<&Track> {
        return self.report_current();
    }

    fn report_current(&mut self) -> Option<&Track> {
        let notice = match self.current() {
            Some(track) => Notice::NowPlaying(track.clone()),
            None => Notice::NothingPlaying,
        };
        self.sink.notify(notice);
        return self.current();
    }

    /// Send the full listing to the sink.
    pub fn display_all(&mut self) {
        let listing = self.tracks.iter().cloned().collect();
        self.sink.notify(Notice::Listing(listing));
    }

    /// Sort by title. The cursor stays on its node.
    pub fn sort(&mut self) {
        if self.tracks.len() <= 1 {
            return;
        }
        sort_by(&mut self.tracks, Track::cmp_title);
        debug!(len = self.tracks.len(), "sorted playlist");
        self.sink.notify(Notice::Sorted);
    }

    /// Shuffle with the playlist's own generator.
    pub fn shuffle(&mut self) {
        shuffle(&mut self.tracks, &mut self.rng);
        debug!(len = self.tracks.len(), "shuffled playlist");
        self.sink.notify(Notice::Shuffled);
    }

    /// Shuffle with a caller-supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.tracks, rng);
        debug!(len = self.tracks.len(), "shuffled playlist");
        self.sink.notify(Notice::Shuffled);
    }

    /// Remove every track without notifying.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }
}

impl<N: Notify + Clone> Clone for Playlist<N> {
    /// Copy the tracks in order. The copy starts playing from its first track.
    fn clone(&self) -> Self {
        let tracks = self.tracks.clone();
        let cursor = tracks.first();
        return Playlist {
            tracks,
            cursor,
            rng: self.rng.clone(),
            sink: self.sink.clone(),
        };
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.tracks.clone_from(&source.tracks);
        self.cursor = self.tracks.first();
        self.check_cursor();
    }
}
