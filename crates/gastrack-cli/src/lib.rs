// NOTE: gastrack CLI layout
//
// - args: clap definitions only
// - commands: resolves the data directory, sets up logging, dispatches
// - handlers: one module per subcommand; load through the Ledger, never
//   compute metrics themselves
// - presentation: plain-text views (Display impls) over engine output

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, EntryArgs};
pub use commands::run;
