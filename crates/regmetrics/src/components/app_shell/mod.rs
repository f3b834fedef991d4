//! App shell components: AppBar, StatusStrip, Footer
//!
//! These components form the persistent UI framework around the dashboard.

mod appbar;
mod footer;
mod status_strip;

pub use appbar::AppBar;
pub use footer::Footer;
pub use status_strip::StatusStrip;
