#![doc = "Country bearings: all-pairs compass directions between the world's countries"]
mod atlas;
mod common;
mod config;
mod fallback;
mod io;
mod mainland;
mod matrix;
mod normalize;
mod roster;

#[doc(inline)]
pub use roster::{CountryId, ROSTER_LEN};

#[doc(inline)]
pub use normalize::normalize;

#[doc(inline)]
pub use config::{Settings, DEFAULT_DENSITY};

#[doc(inline)]
pub use fallback::FallbackTable;

#[doc(inline)]
pub use mainland::{rule_for, select as select_mainland, select_with, Correction, LonLatBox, Rule, PATCH_RADIUS_M};

#[doc(inline)]
pub use atlas::{Atlas, Representation};

#[doc(inline)]
pub use matrix::{direction, direction_between, Direction, DirectionMatrix, Summary};

#[doc(inline)]
pub use io::{
    matrix_to_json_bytes, read_geojson, read_geojson_bytes, read_records, read_shapefile, write_matrix_json,
    RawRecord, NAME_COLUMNS,
};

#[doc(inline)]
pub use geodesy::{SampleDensity, Sector};
