//! Ammonia synthesis models.
//!
//! This module contains models for the synthesis loop of an ammonia plant,
//! currently the parametric plant economics model.

pub mod plant;
