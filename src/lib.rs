pub mod api;
pub mod config;
pub mod error;
pub mod realtime;
pub mod scorer;
pub mod text;
// cmd and reports are binary modules, declared from main.rs.
