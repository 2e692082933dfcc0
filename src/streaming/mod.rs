pub mod error;
pub mod session;

// Re-export commonly used types
pub use error::{AbortOnError, ErrorPolicy, Flow, ReplayError, SilentSkip, SkipErrors};
pub use session::ReplaySession;
