//! punchlist: a local to-do list with durable state.
//!
//! The [`store`] module owns the in-memory task list, [`storage`] persists it
//! to a single JSON slot, and [`view`] wires gestures to the store and
//! renders the result. The `punch` binary is a thin clap frontend over
//! [`view::Controller`].

pub mod models;
pub mod storage;
pub mod store;
pub mod view;
