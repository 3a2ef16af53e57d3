//! Browser glue shared by the boot sequence and widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its `web-sys` calls behind the `csr` feature and exposes
//! a plain-Rust surface, so components never repeat DOM plumbing and the pure
//! parts test on the host.

pub mod clock;
pub mod dom;
pub mod event_sink;
pub mod notify;
pub mod timer;
pub mod web_storage;
