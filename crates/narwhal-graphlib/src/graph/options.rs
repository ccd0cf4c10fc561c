//! Graph orientation.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Directed,
    Undirected,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Directed => "directed",
            Orientation::Undirected => "undirected",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            _ => Err(()),
        }
    }
}
