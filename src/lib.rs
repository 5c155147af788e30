pub mod api;
pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod lexicon;
// cmd and reports are binary modules (see main.rs).
