//! Core types for localstore.
//!
//! Everything in this crate is pure data and pure functions. Backends that
//! perform I/O live in the `localstore` crate and implement
//! [`storage::KeyValueStore`].

pub mod storage;
