pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod gateway;
pub mod llm;
pub mod share;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use workflow::launch;
