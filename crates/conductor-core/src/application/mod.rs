//! Application layer: orchestration over the driven ports.

pub mod checkup;
pub mod error;
pub mod ports;
pub mod report;
pub mod services;
pub mod session;

pub use error::ApplicationError;
pub use report::{AnalysisReport, DeepReport, MainFile, RouteHit};
pub use services::lifecycle::{
    ActionKind, BackupOutcome, FileAction, InitOptions, InitOutcome, LifecycleEngine,
    RestoreOutcome, UpgradeOptions, UpgradeOutcome, count_kind,
};
pub use session::RunSession;
