pub mod add;
pub mod context;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod history;
pub mod init;

pub use context::HandlerContext;
