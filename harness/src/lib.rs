//! Degrees Harness: everything between a terminal and the search crate.
//!
//! The harness resolves typed names to person ids, runs queries through
//! `degrees_search`, and renders results. It does not implement search
//! itself; the `degrees` binary is a thin clap front end over
//! [`session::run_session`].

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod render;
pub mod resolve;
pub mod runner;
pub mod session;
