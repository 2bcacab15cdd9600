//! Combined-asset HTTP server library
//!
//! Serves a *virtual combined asset*: a request target such as
//! `/assets/??a.js,b.js` names several files under one directory; the
//! server concatenates their raw bytes in request order and returns them
//! as a single response typed after the first filename's extension.

pub mod combine;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
