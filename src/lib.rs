//! YouTube Video View Count Predictor
//!
//! A batch pipeline that predicts a video's view count from its metadata.
//!
//! ## Architecture
//!
//! ```text
//! Client (API/URL/CSV) → Cleaner → FeatureEngineer → Trainer/Selector
//!                                        ↓                  ↓
//!                               Inference Adapter  ←  TrainedArtifact
//! ```
//!
//! Training fits a fixed set of candidate regressors on the log-transformed
//! view count and keeps the one with the best held-out R², together with the
//! feature contract and the fitted category encoder. Inference re-applies
//! the same cleaning and feature steps, aligns columns to the contract by
//! name, and inverts the log transform.

pub mod cleaner;
pub mod client;
pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod inference;
pub mod model;
pub mod storage;
pub mod types;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod types_tests;
