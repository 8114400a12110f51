// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into bar, sidebar, content, search, legend, status
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Top bar (page title, API base URL, signed-in admin)
// - sidebar: Navigation list
// - table: List page table
// - dashboard: Per-status counts
// - login: Sign-in screen and shared form rendering
// - legend: Hotkey legend
// - search: Search input box with query and match count
// - status_bar: Bottom status bar (route, counts, filters, paging)
// - dialogs: Modals (detail, status picker, delete confirmation, forms)
// - toast: Toast notifications (brief pop-up messages)

pub mod dashboard;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod login;
pub mod render;
pub mod search;
pub mod sidebar;
pub mod status_bar;
pub mod system_bar;
pub mod table;
pub mod toast;

pub use render::render;
