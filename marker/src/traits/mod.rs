//!
//! Traits Module
//!
//! This module contains the seams of the grading core.
//!
//! - [`comparator`]: the strategy trait each question type's review comparison implements.
//! - [`identity`]: accessors the report projector needs from a roster member.

pub mod comparator;
pub mod identity;
