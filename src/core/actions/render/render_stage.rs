use log::trace;
use std::fmt;

/// Progress of one render call. Only `Configured` can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Configured,
    Partitioned,
    Dispatched,
    AllJoined,
    Reduced,
    Done,
}

impl RenderStage {
    #[must_use]
    pub fn advance(self) -> Self {
        let next = match self {
            Self::Configured => Self::Partitioned,
            Self::Partitioned => Self::Dispatched,
            Self::Dispatched => Self::AllJoined,
            Self::AllJoined => Self::Reduced,
            Self::Reduced | Self::Done => Self::Done,
        };

        trace!("render stage {} -> {}", self, next);
        next
    }
}

impl fmt::Display for RenderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Configured => "configured",
            Self::Partitioned => "partitioned",
            Self::Dispatched => "dispatched",
            Self::AllJoined => "all-joined",
            Self::Reduced => "reduced",
            Self::Done => "done",
        };

        f.write_str(name)
    }
}
