pub mod cli;
pub mod encoding;
pub mod extract;
pub mod reconcile;
pub mod report;
pub mod scanner;
pub mod walker;
