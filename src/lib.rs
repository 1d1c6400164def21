//! LocMux - shared location monitoring.
//!
//! This library multiplexes many independent consumers ("monitors") onto a
//! single underlying location-sensing device. Each monitor declares the
//! precision it needs; the coordinator reconciles all declared requirements
//! into one device-wide accuracy setting, activates the device while at
//! least one monitor is registered, and fans every reading out to all
//! registered monitors on their own executors.
//!
//! # High-Level API
//!
//! The [`coordinator`] module provides the public facade:
//!
//! ```ignore
//! use std::sync::Arc;
//! use locmux::accuracy::Accuracy;
//! use locmux::coordinator::LocationCoordinator;
//! use locmux::dispatch::sink_fn;
//! use locmux::monitor::MonitorToken;
//!
//! let coordinator = LocationCoordinator::new(device);
//!
//! let token = MonitorToken::next();
//! coordinator.register_default(
//!     token,
//!     Accuracy::HUNDRED_METERS,
//!     sink_fn(|reading| println!("{}, {}", reading.latitude, reading.longitude)),
//! )?;
//!
//! // ... later
//! coordinator.deregister(token);
//! ```
//!
//! The underlying device is an external collaborator behind the
//! [`device::LocationDevice`] trait; platform glue feeds readings and
//! authorization changes back in through [`device::spawn_event_pump`] or by
//! calling the coordinator's `handle_*` methods directly.

pub mod accuracy;
pub mod coordinator;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod permission;
pub mod reading;

/// Version of the LocMux library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
