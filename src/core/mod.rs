// src/core/mod.rs

// Tool logic, independent of the terminal UI.

/// Static table of tools with their names, descriptions and categories.
pub mod catalog;

/// Turns a `ToolRequest` into a `ToolOutput` on the async runtime.
pub mod dispatcher;

pub mod error;
pub mod export;
pub mod lookups;

/// Request, output and event types shared by the core and the shell.
pub mod models;

pub mod obfuscator;
pub mod password;
pub mod transforms;
