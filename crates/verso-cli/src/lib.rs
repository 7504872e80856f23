//! Building blocks of the `verso` command line tool

pub mod commands;
pub mod config;
pub mod output;
