pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod process;
pub mod recipes;
pub mod session;
pub mod telemetry;
pub mod verify;
pub mod version;

pub use config::Config;
pub use error::{CheckError, CheckResult};
pub use session::CheckSession;
pub use verify::{Fixtures, ReleaseCheck};
pub use version::ReleaseVersion;
