pub mod config;
pub mod dashboard;
pub mod data;
pub mod entries;
pub mod export;
pub mod helpers;
pub mod list;
pub mod settings;
