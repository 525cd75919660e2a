//! polyquery - Answer aggregate geometry queries over a text-encoded list of polygons

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod parser;
