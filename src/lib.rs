//! egui components for workflow front-ends: a clickable [`ui::Button`] wrapper
//! and the [`ui::StatusInfo`] legend of node statuses.

pub mod app;
pub mod config;
pub mod logger;
pub mod ui;
