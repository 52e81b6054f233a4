pub mod client;

pub use client::TextClient;
