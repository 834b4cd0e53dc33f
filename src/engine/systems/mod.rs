// ============================================
// Systems Module - Системы движка
// ============================================

mod init_system;
mod save_system;
mod update_system;

pub use init_system::InitSystem;
pub use save_system::SaveSystem;
pub use update_system::{RuntimeDriver, StepOutcome, UpdateSystem};
