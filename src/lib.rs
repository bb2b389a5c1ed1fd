// wire2html - Wireframe screenshot to Tailwind HTML conversion proxy

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod server;
pub mod translation;
pub mod utils;
