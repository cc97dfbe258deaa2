// VerityFlow: credibility verdicts for forwarded messages
//
// This is the library root. Each module corresponds to a major subsystem
// of the verdict rendering and history/export pipeline.

pub mod backend;
pub mod config;
pub mod export;
pub mod history;
pub mod output;
pub mod render;
pub mod verdict;
