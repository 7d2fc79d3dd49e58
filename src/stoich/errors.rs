/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the stoichiometry module

use thiserror::Error;

use crate::atoms::AtomError;

/// Errors that can occur while blending and normalizing compositions
#[derive(Error, Debug)]
pub enum StoichError {
    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    #[error(transparent)]
    Atom(#[from] AtomError),
}

/// Result type for stoichiometry operations
pub type Result<T> = std::result::Result<T, StoichError>;
