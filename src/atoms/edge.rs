/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Absorption edge labels

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{AtomError, Result};

/// Core level probed by an absorption measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    K,
    L1,
    L2,
    L3,
}

impl Edge {
    /// All supported edges, ordered by edge index
    pub const ALL: [Edge; 4] = [Edge::K, Edge::L1, Edge::L2, Edge::L3];

    /// Index used by edge energy tables (K=0, L1=1, L2=2, L3=3)
    pub fn index(self) -> usize {
        match self {
            Edge::K => 0,
            Edge::L1 => 1,
            Edge::L2 => 2,
            Edge::L3 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Edge::K => "K",
            Edge::L1 => "L1",
            Edge::L2 => "L2",
            Edge::L3 => "L3",
        }
    }
}

impl FromStr for Edge {
    type Err = AtomError;

    fn from_str(label: &str) -> Result<Self> {
        match label.trim() {
            "K" => Ok(Edge::K),
            "L1" => Ok(Edge::L1),
            "L2" => Ok(Edge::L2),
            "L3" => Ok(Edge::L3),
            other => Err(AtomError::UnsupportedEdge(other.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_indices() {
        for (i, edge) in Edge::ALL.iter().enumerate() {
            assert_eq!(edge.index(), i);
            assert_eq!(edge.label().parse::<Edge>().unwrap(), *edge);
        }
    }

    #[test]
    fn test_unsupported_edge() {
        for label in ["M1", "k", "L4", ""] {
            let err = label.parse::<Edge>().unwrap_err();
            assert!(matches!(err, AtomError::UnsupportedEdge(_)));
        }
    }
}
