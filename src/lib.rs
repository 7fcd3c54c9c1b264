//! tfplugindocs: provider documentation tooling
//!
//! Layers, innermost first: `domain` (layout rules), `application`
//! (migration service), `infrastructure` (filesystem, terminal, wiring),
//! `cli` (flag parsing, help, dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
