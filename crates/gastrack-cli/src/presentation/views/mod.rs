// Each view pairs borrowed data with DisplayOptions and renders in `fmt`

mod dashboard;
mod entry;
mod history;
mod init;

pub use dashboard::*;
pub use entry::*;
pub use history::*;
pub use init::*;
