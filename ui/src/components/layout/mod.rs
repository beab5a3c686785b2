//! Layout components

mod app_shell;
mod sidebar;
mod top_bar;

pub use app_shell::AppShell;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
