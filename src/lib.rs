//! Warehouse Operations Dashboard
//!
//! This crate provides a typed client for the warehouse dispatch backend and
//! the simulation (clock, position interpolation, order progress) behind the
//! grid view of the operations dashboard.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod simulation;
