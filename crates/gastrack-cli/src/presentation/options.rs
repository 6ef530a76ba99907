use gastrack_engine::NumberFormat;

/// Display formatting options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub enable_color: bool,
    pub number_format: NumberFormat,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            number_format: NumberFormat::default(),
        }
    }
}

impl DisplayOptions {
    /// Options for snapshot-friendly output
    pub fn plain() -> Self {
        Self {
            enable_color: false,
            ..Self::default()
        }
    }
}
