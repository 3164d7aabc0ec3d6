// Library exports for the flow-control console menu

pub mod config;
pub mod errors;
pub mod pricing;
pub mod tasks;
pub mod testing;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::InputError;
pub use tasks::Task;
pub use ui::menus::MainMenu;
pub use ui::{Console, TerminalConsole};
