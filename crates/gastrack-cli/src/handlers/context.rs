use crate::presentation::DisplayOptions;
use crate::types::OutputFormat;
use anyhow::Result;
use gastrack_engine::NumberFormat;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt::Display;

/// Per-invocation output settings shared by every handler
pub struct HandlerContext {
    pub format: OutputFormat,
    pub options: DisplayOptions,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, number_format: NumberFormat) -> Self {
        let enable_color = format == OutputFormat::Plain
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();
        Self {
            format,
            options: DisplayOptions {
                enable_color,
                number_format,
            },
        }
    }

    /// Print `data` as JSON or `view` as text depending on `--format`
    pub fn render<T, V>(&self, data: &T, view: V) -> Result<()>
    where
        T: Serialize + ?Sized,
        V: Display,
    {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Plain => print!("{}", view),
        }
        Ok(())
    }
}
