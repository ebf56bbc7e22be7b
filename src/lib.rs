pub mod analyze;
pub mod apply;
pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod errors;
pub mod generate;
pub mod render;
pub mod schema;
pub mod shell;
pub mod ux;
pub mod web;
