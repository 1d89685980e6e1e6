// src/ui/widgets/mod.rs

pub mod disclaimer_popup;
pub mod footer;
pub mod header;
pub mod input;
pub mod log_view;
pub mod output;
pub mod sidebar;
