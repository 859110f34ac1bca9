//! Disk-head scheduling simulator.
//!
//! Computes the order in which a disk head services pending cylinder
//! requests under six classic algorithms, and the seek distance each order
//! costs. The engine is pure: no global state, no I/O, deterministic output.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Cylinder`, `SimulationInput`, `Algorithm`,
//!   `AlgorithmSelector`, `SeekResult`, sweep policies, random workloads
//! - **`dispatching`**: `SeekPolicy` trait, the six built-in policies, and
//!   the stateless `SeekEngine` (single run, ALL-mode `Comparison`)
//! - **`metrics`**: Total/average seek time and movement KPIs
//! - **`validation`**: Input checks for raw caller data
//! - **`api`**: HTTP JSON service (`POST /simulate`)
//! - **`report`**: Text tables and ASCII head-movement charts
//!
//! # Example
//!
//! ```
//! use disk_scheduling::dispatching::SeekEngine;
//! use disk_scheduling::models::{Algorithm, SimulationInput};
//!
//! let input = SimulationInput::new(vec![98, 183, 37, 122, 14, 124, 65, 67], 53, 200).unwrap();
//! let scan = SeekEngine::new().run(Algorithm::Scan, &input);
//! assert_eq!(scan.total_seek_time(), 331);
//! assert_eq!(scan.seek_sequence(), &[65, 67, 98, 122, 124, 183, 37, 14]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod api;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;
pub mod validation;
