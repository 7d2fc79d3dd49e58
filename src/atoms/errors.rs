/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the atoms module

/// Error types for the atoms module
#[derive(Debug, thiserror::Error)]
pub enum AtomError {
    #[error("Invalid formula: {0}")]
    InvalidFormula(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Unsupported edge: {0}. Supported edges are: K, L1, L2, L3")]
    UnsupportedEdge(String),

    #[error("Invalid atomic number: {0}")]
    InvalidAtomicNumber(u32),

    #[error("Missing atomic data: {0}")]
    MissingData(String),

    #[error("Invalid element table: {0}")]
    InvalidTable(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for atom operations
pub type Result<T> = std::result::Result<T, AtomError>;
