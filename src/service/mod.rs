//! 服務層模組
//!
//! 提供 gRPC 服務所需的工作階段、指令解碼、snapshot 與 command mask

pub mod command_mask;
pub mod commands;
pub mod preferences;
pub mod scan;
pub mod snapshot;
pub mod state;

pub use command_mask::command_mask_from_session;
pub use commands::Command;
pub use preferences::{Preferences, PreferencesError, PreferencesStore};
pub use scan::{ScanSource, SimulatedScanner};
pub use snapshot::snapshot_from_session;
pub use state::{CommandOutcome, EntryStage, Session};
