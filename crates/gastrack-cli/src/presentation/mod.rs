// Views are plain `Display` impls over engine output.
// They format numbers and dates but never derive metrics.

mod options;
pub mod views;

pub use options::DisplayOptions;
