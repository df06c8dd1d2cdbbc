// Components module - UI building blocks
//
// - Title bar: page title, language and theme
// - Search form: username field
// - Status panel: loading / error / online / offline block
// - Logs panel: tail of captured log entries
// - Status bar: key hints and current location
// - Toast: transient notifications

pub mod logs_panel;
pub mod search_form;
pub mod status_bar;
pub mod status_panel;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;
