//! # Ammonia Plant Models
//!
//! Domain-specific models for ammonia (Haber-Bosch) synthesis plant studies:
//! validated process parameters, a parametric efficiency model, and an
//! economics projection built for interactive what-if exploration.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific model implementations and their
//!   [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts inside a model's internal `core` module and moves to
//! [`support`] once it proves useful across models.

pub mod models;
pub mod support;
