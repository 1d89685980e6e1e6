// src/lib.rs

pub mod app;
pub mod clipboard;
pub mod config;
pub mod core;
pub mod handler;
pub mod logging;
pub mod ui;
