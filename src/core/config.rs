use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`/`$VISUAL`, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&ed).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", ed));
                Ok(())
            }
            _ if ed != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    ed, default_editor
                ));
                let status = Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Config(format!("editor '{}' failed", default_editor)))
                }
            }
            Ok(_) => Err(AppError::Config(format!("editor '{}' failed", ed))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
