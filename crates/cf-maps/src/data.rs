//! Builtin compressor map tables.
//!
//! Fitted coefficients for the c65 and c75 frames against the version-1
//! cubic bases, at the full printed precision of the fit. The c40 and c45
//! frames are registered as placeholders until their maps are fitted.

use crate::model::MapFit;

/// One entry of the builtin table.
#[derive(Debug, Clone)]
pub struct BuiltinMapEntry {
    pub name: &'static str,
    pub fit: Option<MapFit>,
}

static BUILTIN_MAPS: [BuiltinMapEntry; 4] = [
    BuiltinMapEntry {
        name: "c40",
        fit: None,
    },
    BuiltinMapEntry {
        name: "c45",
        fit: None,
    },
    BuiltinMapEntry {
        name: "c65",
        fit: Some(MapFit {
            speed_coefficients: [
                0.0,
                0.53067103,
                0.69780107,
                0.10331809,
                -0.16200128,
                -0.08223556,
                -0.02178603,
                0.02439215,
                0.02240949,
                0.01975992,
            ],
            speed_intercept: 0.016134302866640093,
            efficiency_coefficients: [
                0.0,
                1.64671832,
                3.54276976,
                -4.46497957,
                -15.45505105,
                -29.54862438,
                45.84447783,
                -13.97743804,
                41.571843,
                -32.512664,
                -6.20509292,
                -3.85618839,
                12.36946311,
                2.73892889,
                -2.69437958,
                -1.52242883,
                1.56210671,
                -6.50088177,
                10.14315544,
                -5.40818861,
            ],
            efficiency_intercept: 0.8375544267313313,
            // [rpm, flow, head, efficiency]
            feature_mean: [6.92714286e3, 8.20365714e3, 7.72007143e3, 7.6957e-1],
            feature_variance: [3.61042041e6, 1.22862924e7, 2.19731243e7, 1.12604241e-2],
        }),
    },
    BuiltinMapEntry {
        name: "c75",
        fit: Some(MapFit {
            speed_coefficients: [
                0.0,
                0.62712991,
                0.76464215,
                0.05535437,
                -0.15509031,
                -0.08349052,
                -0.00822576,
                0.01047928,
                0.01391111,
                0.02049904,
            ],
            speed_intercept: 0.015590493104049169,
            efficiency_coefficients: [
                0.0,
                -2.47666921,
                -1.45398106,
                2.84513311,
                -11.7445615,
                -23.74548426,
                30.25531553,
                -13.05048949,
                31.45447672,
                -19.00760562,
                -3.19451139,
                -7.27199042,
                10.2292593,
                -8.17331058,
                21.34364545,
                -12.270367,
                -4.21022133,
                14.88791052,
                -16.23265985,
                5.47532771,
            ],
            efficiency_intercept: 0.4297928285078984,
            feature_mean: [5.5e3, 1.08585057e4, 1.49221e4, 8.18492857e-1],
            feature_variance: [1.0e6, 1.11464157e7, 5.98813624e7, 3.81112209e-3],
        }),
    },
];

/// The builtin table, placeholders included.
pub fn builtin_maps() -> &'static [BuiltinMapEntry] {
    &BUILTIN_MAPS
}
