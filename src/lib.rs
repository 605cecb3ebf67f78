// ABOUTME: Library crate for the Ajo terminal client exposing the tutorial for testing and embedding

#![allow(missing_docs)]

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
