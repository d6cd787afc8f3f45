// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"

use std::cmp::Ordering;
use std::fmt;

/// A playlist entry: a title and a duration in whole seconds.
///
/// Two tracks are equal when both fields match. Playlist ordering looks at
/// the title alone, see [`Track::cmp_title`]. There is no `Ord` impl: one
/// that ignored the duration would disagree with `Eq`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Track {
    title: String,
    duration: u32,
}

impl Track {
    pub fn new(title: impl Into<String>, duration: u32) -> Track {
        return Track {
            title: title.into(),
            duration,
        };
    }

    pub fn title(&self) -> &str {
        return &self.title;
    }

    /// Duration in seconds.
    pub fn duration(&self) -> u32 {
        return self.duration;
    }

    /// Lexicographic order on titles. Durations are never a tie-break.
    pub fn cmp_title(&self, other: &Track) -> Ordering {
        return self.title.cmp(&other.title);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{} - {} seconds", self.title, self.duration);
    }
}
