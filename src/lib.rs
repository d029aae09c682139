pub mod api;
pub mod app;
pub mod cli;
pub mod code;
pub mod color;
pub mod config;
pub mod event;
pub mod import;
pub mod logger;
pub mod tui;
pub mod types;
pub mod ui;
