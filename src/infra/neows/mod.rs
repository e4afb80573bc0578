pub mod client;

pub use client::NeoWsClient;
