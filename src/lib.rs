//! SnapScribe Library
//!
//! Core modules for the SnapScribe image-to-document bot.

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod extractor;
pub mod gateway;
pub mod normalizer;
pub mod ocr;
pub mod responses;
pub mod session;
