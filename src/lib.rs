//! Fighter Insights - Fighter Performance Dashboard
//!
//! This crate scores fighters across six skill dimensions, derives
//! strengths, weaknesses and training recommendations from those scores,
//! and serves fighters, analyses, training sessions and performance history
//! over a REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
