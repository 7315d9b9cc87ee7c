//! Train booking service.
//!
//! Trains run a fixed list of stations an hour apart and carry booked
//! tickets. This crate answers questions about them: seats left between two
//! stations, boarding counts, the oldest passenger, and which trains pass a
//! station in a time window.

pub mod config;
pub mod domain;
pub mod engine;
pub mod repository;
pub mod web;
