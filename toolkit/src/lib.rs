//! Storefront e-bike toolkit core.
//!
//! This crate is UI-framework agnostic: it owns the configuration model, the
//! module registry, every calculator, booking wizard, and comparison reducer,
//! and the typed view-models the `widgets` crate renders. Browser concerns
//! (DOM scanning, `localStorage`, timers, custom events) reach the core only
//! through the [`storage::KeyValueStore`] and [`events::EventSink`] seams so
//! all logic here is testable on the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toolkit`] | Orchestrator: context, module table, scanning, feature toggles |
//! | [`module`] | Tool kinds, per-instance bookkeeping, instance state enum |
//! | [`config`] | Typed configuration, host overrides, theme adaptations |
//! | [`theme`] | Page theme detection and stylesheet/CSS variable helpers |
//! | [`mount`] | Container descriptors and instance id generation |
//! | [`storage`] | Key/value storage abstraction |
//! | [`events`] | Outbound toolkit events |
//! | [`catalog`] | Data providers and built-in demo data |
//! | [`sizing`], [`financing`], [`range`] | Calculators |
//! | [`wishlist`] | Storage-backed wishlist |
//! | [`booking`] | Step machine plus test-ride and service wizards |
//! | [`comparison`] | Bike comparison table and insights |
//! | [`dashboard`] | Vendor sync dashboard model |
//! | [`blog`] | Blog draft generator model |

pub mod blog;
pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod financing;
pub mod input;
pub mod module;
pub mod mount;
pub mod range;
pub mod sizing;
pub mod storage;
pub mod theme;
pub mod toolkit;
pub mod wishlist;

pub use error::ToolkitError;
pub use toolkit::{AppContext, Toolkit};

/// Toolkit release version, reported in events and the stylesheet query.
pub const VERSION: &str = "3.0.0";
