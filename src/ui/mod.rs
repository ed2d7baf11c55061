//! UI components for the document client

pub mod auth;
pub mod common;
pub mod diagram;
pub mod documents;
pub mod folders;
pub mod pages;
