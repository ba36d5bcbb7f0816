pub mod result_panel;

pub use result_panel::{ResultPanel, ResultPanelProps};
