//! lumi - content store, live sync bus, admin editors and sitemap tooling
//! for the LumiXpert engraving site.
//!
//! ```text
//! editor ──put──► store            (JSON records, one key per section)
//!    │
//!    └──publish──► bus ──► view    (live views re-render on update)
//!
//! store ──► build ──► index.html, sitemap.xml, robots.txt
//! ```

pub mod admin;
pub mod build;
pub mod bus;
pub mod cli;
pub mod config;
pub mod consent;
pub mod content;
pub mod edit;
pub mod editor;
pub mod generator;
pub mod logger;
pub mod store;
pub mod utils;
pub mod view;
