/// Configuration display handler
use anyhow::Result;

use faithlog_core::config::{get_config_dir, DB_PATH_ENV};

use crate::app::App;

pub fn handle_config(app: &App) -> Result<()> {
    println!("Configuration:");
    println!("{}", "\u{2550}".repeat(14));

    println!("  config_file      = {}", get_config_dir()?.join("config.toml").display());
    println!("  database_path    = {}", app.database_path.display());
    if std::env::var_os(DB_PATH_ENV).is_some() {
        println!("                     (from {DB_PATH_ENV})");
    }
    println!("  schema_version   = {}", app.database().schema_version()?);
    println!("  export_dir       = {}", app.config.export_dir().display());
    println!("  default_language = {}", app.config.language());
    match &app.config.report_font {
        Some(path) => println!("  report_font      = {}", path.display()),
        None => println!("  report_font      = (built-in Helvetica)"),
    }
    println!("  language         = {}", app.language()?);
    Ok(())
}
