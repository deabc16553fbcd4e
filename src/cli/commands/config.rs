use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_file, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            info("Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {} (run `zeitkonto init`)",
                    path.display()
                )));
            }
            let missing = missing_keys(&fs::read_to_string(&path)?);
            if missing.is_empty() {
                success(format!("{} is complete.", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {} (run `zeitkonto config --migrate`)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }

        if *migrate {
            // command-line overrides stay out of the file
            let on_disk = Config::load()?;
            if !path.exists() {
                on_disk.init_all()?;
                success(format!("Configuration written to {}", path.display()));
            } else {
                let added = migrate_file(&path, &on_disk)?;
                if added.is_empty() {
                    info("Nothing to migrate.");
                } else {
                    success(format!("Added: {}", added.join(", ")));
                }
            }
        }

        if *edit_config {
            edit(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the file in the requested editor, falling back to the default one.
fn edit(path: &std::path::Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if Command::new(&first).arg(path).status().is_ok_and(|s| s.success()) {
        success(format!("Configuration file edited using '{first}'"));
        return Ok(());
    }

    if first != fallback {
        warning(format!(
            "Editor '{first}' not available, falling back to '{fallback}'"
        ));
        if Command::new(&fallback).arg(path).status().is_ok_and(|s| s.success()) {
            success(format!("Configuration file edited using '{fallback}'"));
            return Ok(());
        }
    }

    Err(AppError::Other(format!(
        "failed to edit {} with '{fallback}'",
        path.display()
    )))
}
