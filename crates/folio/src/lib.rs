//! Folio - portfolio upload and showcase front end.
//!
//! A Dioxus app with two surfaces:
//!
//! - **Portfolio page**: renders the portfolio the backend serves at
//!   `portfolios/file`, video included.
//! - **Upload form**: a modal with a video drop zone (uploaded straight to
//!   S3 under a SHA-256 key) and a metadata form that is only submitted when
//!   every field validates.
//!
//! All rules (validation, gate, keys, progress) live in `folio-core`; this
//! crate only wires them to components.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: settings are baked in at build time, requests go through `fetch()`
//! - **Desktop**: settings are read from the process environment

#![forbid(unsafe_code)]

pub mod components;
pub mod error;
pub mod services;
pub mod utils;
