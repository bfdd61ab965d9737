use crate::core::data::iteration_buffer::IterationBufferError;
use crate::core::util::thread_limit::ThreadCountError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    ThreadCount(ThreadCountError),
    Output(IterationBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadCount(err) => write!(f, "{}", err),
            Self::Output(err) => write!(f, "output buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ThreadCount(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ThreadCountError> for RenderError {
    fn from(err: ThreadCountError) -> Self {
        Self::ThreadCount(err)
    }
}

impl From<IterationBufferError> for RenderError {
    fn from(err: IterationBufferError) -> Self {
        Self::Output(err)
    }
}
