use crate::presentation::DisplayOptions;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitSummary {
    pub data_dir: PathBuf,
    pub config_path: PathBuf,
    pub database_path: PathBuf,
    /// False when a config file was already present
    pub created: bool,
}

pub struct InitView<'a> {
    summary: &'a InitSummary,
    options: &'a DisplayOptions,
}

impl<'a> InitView<'a> {
    pub fn new(summary: &'a InitSummary, options: &'a DisplayOptions) -> Self {
        Self { summary, options }
    }
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.summary.created {
            "Initialized gastrack data directory"
        } else {
            "gastrack data directory already initialized"
        };
        if self.options.enable_color {
            writeln!(f, "{}", status.green().bold())?;
        } else {
            writeln!(f, "{}", status)?;
        }

        writeln!(f, "  Data dir: {}", self.summary.data_dir.display())?;
        writeln!(f, "  Config:   {}", self.summary.config_path.display())?;
        writeln!(f, "  Database: {}", self.summary.database_path.display())?;

        if self.summary.created {
            writeln!(f)?;
            writeln!(f, "Next: gastrack add --odometer <km> --price <per liter> --liters <L>")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(created: bool) -> InitSummary {
        InitSummary {
            data_dir: PathBuf::from("/data"),
            config_path: PathBuf::from("/data/config.toml"),
            database_path: PathBuf::from("/data/gastrack.db"),
            created,
        }
    }

    #[test]
    fn test_fresh_init() {
        let summary = summary(true);
        let options = DisplayOptions::plain();
        insta::assert_snapshot!(InitView::new(&summary, &options).to_string(), @r"
        Initialized gastrack data directory
          Data dir: /data
          Config:   /data/config.toml
          Database: /data/gastrack.db

        Next: gastrack add --odometer <km> --price <per liter> --liters <L>
        ");
    }

    #[test]
    fn test_repeat_init_has_no_hint() {
        let summary = summary(false);
        let options = DisplayOptions::plain();
        let text = InitView::new(&summary, &options).to_string();
        assert!(text.starts_with("gastrack data directory already initialized"));
        assert!(!text.contains("Next:"));
    }
}
