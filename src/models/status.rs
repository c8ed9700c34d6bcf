use serde::{Deserialize, Serialize};

/// The status values the reports know about. Files may contain others; they
/// are counted like any value but have no fixed color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "pass")]
    Pass,
    #[serde(rename = "fail")]
    Fail,
    #[serde(rename = "not run")]
    NotRun,
    #[serde(rename = "not ready")]
    NotReady,
    #[serde(rename = "deprecated")]
    Deprecated,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pass,
        Status::Fail,
        Status::NotRun,
        Status::NotReady,
        Status::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::NotRun => "not run",
            Self::NotReady => "not ready",
            Self::Deprecated => "deprecated",
        }
    }

    /// Exact match against the CSV spelling.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Fixed color as an xterm-256 palette index and its hex value, so the
    /// terminal and JSON views paint a status the same way.
    fn palette(&self) -> (u8, &'static str) {
        match self {
            Self::Pass => (34, "#00af00"),
            Self::Fail => (160, "#d70000"),
            Self::NotRun => (244, "#808080"),
            Self::NotReady => (220, "#ffd700"),
            Self::Deprecated => (164, "#d700d7"),
        }
    }

    pub fn color(&self) -> &'static str {
        self.palette().1
    }

    /// Terminal counterpart of [`Status::color`].
    pub fn ansi256(&self) -> u8 {
        self.palette().0
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color for an arbitrary status text; `None` for values outside the fixed set.
pub fn status_color(value: &str) -> Option<&'static str> {
    Status::parse(value).map(|s| s.color())
}
