/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the absorption calculations

use thiserror::Error;

use crate::atoms::AtomError;

/// Errors that can occur while computing absorption parameters
#[derive(Error, Debug)]
pub enum XasError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Atom(#[from] AtomError),
}

/// Result type for absorption calculations
pub type Result<T> = std::result::Result<T, XasError>;
