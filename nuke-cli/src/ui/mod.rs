mod footer;
mod header;
mod layout;
mod list_view;
pub mod report;
mod scan_view;
mod search_bar;
mod theme;
mod truncate;

pub use footer::Footer;
pub use header::Header;
pub use layout::AppLayout;
pub use list_view::ListView;
pub use report::report_lines;
pub use scan_view::ScanView;
pub use search_bar::SearchBar;
pub use theme::Theme;
