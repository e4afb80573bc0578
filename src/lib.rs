pub mod asteroids;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod infra;
pub mod parser;
pub mod service;
pub mod services;
