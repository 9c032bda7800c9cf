use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moods offered for discovery, each mapped to a TMDB genre
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Romantic,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Excited, Mood::Romantic];

    /// TMDB genre id used for discovery
    pub fn genre_id(&self) -> i64 {
        match self {
            Mood::Happy => 35,     // Comedy
            Mood::Sad => 18,       // Drama
            Mood::Excited => 28,   // Action
            Mood::Romantic => 10749, // Romance
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Romantic => "Romantic",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Excited => "🤩",
            Mood::Romantic => "💕",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Mood::Happy => "Feel-good comedies & uplifting stories",
            Mood::Sad => "Emotional dramas & tearjerkers",
            Mood::Excited => "Action-packed thrillers & blockbusters",
            Mood::Romantic => "Romance & heartwarming love stories",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Mood::Happy => "Comedy • Family • Feel-Good",
            Mood::Sad => "Drama • Emotional • Tearjerker",
            Mood::Excited => "Action • Thriller • Adventure",
            Mood::Romantic => "Romance • Love Stories • Date Night",
        }
    }

    /// Reverse lookup from a genre id
    pub fn from_genre_id(genre_id: i64) -> Option<Mood> {
        Self::ALL.into_iter().find(|m| m.genre_id() == genre_id)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "excited" => Ok(Mood::Excited),
            "romantic" => Ok(Mood::Romantic),
            other => Err(format!(
                "Unknown mood: {}. Use 'happy', 'sad', 'excited', or 'romantic'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_mapping() {
        assert_eq!(Mood::Happy.genre_id(), 35);
        assert_eq!(Mood::Sad.genre_id(), 18);
        assert_eq!(Mood::Excited.genre_id(), 28);
        assert_eq!(Mood::Romantic.genre_id(), 10749);
    }

    #[test]
    fn test_parse_and_reverse_lookup() {
        assert_eq!("ROMANTIC".parse::<Mood>(), Ok(Mood::Romantic));
        assert_eq!(" happy ".parse::<Mood>(), Ok(Mood::Happy));
        assert!("grumpy".parse::<Mood>().is_err());

        for mood in Mood::ALL {
            assert_eq!(Mood::from_genre_id(mood.genre_id()), Some(mood));
        }
        assert_eq!(Mood::from_genre_id(99), None);
    }
}
