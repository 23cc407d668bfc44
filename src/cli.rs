pub mod command;
pub mod dispatch;
pub mod run;

pub use dispatch::{Assistant, Reply};
pub use run::{interact, run_app};
