/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for sample planning

use thiserror::Error;

use crate::atoms::AtomError;
use crate::stoich::StoichError;
use crate::xas::XasError;

/// Errors returned by the sample planning operations
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Metal site {0} is not an element of the complex")]
    MetalSiteNotFound(String),

    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    #[error(transparent)]
    Atom(#[from] AtomError),

    #[error(transparent)]
    Stoich(#[from] StoichError),

    #[error(transparent)]
    Xas(#[from] XasError),
}

/// Classification of a [`SampleError`] regardless of the layer that raised it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormula,
    UnknownElement,
    UnsupportedEdge,
    MetalSiteNotFound,
    InvalidComposition,
    InvalidParameter,
    DataUnavailable,
}

fn atom_kind(error: &AtomError) -> ErrorKind {
    match error {
        AtomError::InvalidFormula(_) => ErrorKind::InvalidFormula,
        AtomError::UnknownElement(_) => ErrorKind::UnknownElement,
        AtomError::UnsupportedEdge(_) => ErrorKind::UnsupportedEdge,
        AtomError::InvalidAtomicNumber(_)
        | AtomError::MissingData(_)
        | AtomError::InvalidTable(_)
        | AtomError::Json(_) => ErrorKind::DataUnavailable,
    }
}

impl SampleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SampleError::MetalSiteNotFound(_) => ErrorKind::MetalSiteNotFound,
            SampleError::InvalidComposition(_) => ErrorKind::InvalidComposition,
            SampleError::Atom(error) => atom_kind(error),
            SampleError::Stoich(StoichError::InvalidComposition(_)) => {
                ErrorKind::InvalidComposition
            }
            SampleError::Stoich(StoichError::Atom(error)) => atom_kind(error),
            SampleError::Xas(XasError::InvalidParameter(_)) => ErrorKind::InvalidParameter,
            SampleError::Xas(XasError::Atom(error)) => atom_kind(error),
        }
    }
}

/// Result type for sample planning operations
pub type Result<T> = std::result::Result<T, SampleError>;
