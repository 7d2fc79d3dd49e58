/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Shared fixtures for integration tests

#![allow(dead_code)]

use catmass::TabulatedAtomicData;

/// Reduced photoabsorption tables (keV, cm^2/g) around the Fe K and Pt L3 edges
pub const TABLES_JSON: &str = r#"[
    {
        "symbol": "Fe",
        "edges": {"k": 7.112, "l1": 0.8461, "l2": 0.7211, "l3": 0.7081},
        "photo": [
            [1.0, 4000.0], [7.062, 60.0], [7.112, 55.0], [7.112, 420.0],
            [7.162, 400.0], [11.514, 150.0], [11.614, 146.0], [20.0, 40.0]
        ]
    },
    {
        "symbol": "Pt",
        "edges": {"k": 78.395, "l1": 13.88, "l2": 13.273, "l3": 11.564},
        "photo": [
            [1.0, 3000.0], [7.062, 310.0], [7.162, 300.0], [11.514, 110.0],
            [11.564, 105.0], [11.564, 260.0], [11.614, 255.0], [13.0, 190.0]
        ]
    },
    {"symbol": "O", "photo": [[1.0, 4500.0], [5.0, 50.0], [20.0, 1.2]]},
    {"symbol": "Al", "photo": [[1.0, 3900.0], [5.0, 80.0], [20.0, 2.5]]},
    {"symbol": "Mg", "photo": [[1.0, 3500.0], [5.0, 70.0], [20.0, 2.0]]},
    {"symbol": "C", "photo": [[1.0, 2200.0], [5.0, 18.0], [20.0, 0.4]]},
    {"symbol": "N", "photo": [[1.0, 3300.0], [5.0, 30.0], [20.0, 0.7]]},
    {"symbol": "H", "photo": [[1.0, 7.0], [5.0, 0.03], [20.0, 0.0005]]},
    {"symbol": "Cl", "photo": [[1.0, 1000.0], [5.0, 170.0], [20.0, 5.2]]}
]"#;

pub fn data() -> TabulatedAtomicData {
    init_logging();
    TabulatedAtomicData::from_json(TABLES_JSON).expect("fixture tables are valid")
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
