//! # mc_products: Path-Dependent Products for Monte-Carlo Pricing
//!
//! Product definitions consumed by an external path simulator.
//!
//! This crate provides:
//! - The abstract [`Product`](instruments::Product) contract: timeline,
//!   path payoff, and duplication through an instrument-agnostic handle
//! - The up-and-out barrier call with smoothed knock-out
//!   ([`UpAndOutCall`](instruments::UpAndOutCall))
//! - Monitoring timeline construction (`schedules`)
//!
//! ## Design Principles
//!
//! - **One payoff implementation for valuation and risk**: payoffs are
//!   generic over `mc_core::traits::Scalar`, so plain `f64` pricing and
//!   dual-number sensitivities run the same code
//! - **Immutable contract terms**: the timeline is built once at
//!   construction and shared read-only across all path evaluations
//! - **Infallible evaluation**: errors surface only at the
//!   construction seam; payoff evaluation is a pure function of one
//!   path

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod schedules;
