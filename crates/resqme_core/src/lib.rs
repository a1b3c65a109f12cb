pub mod bounding_box;
pub mod exclusion;
pub mod geopoint;
pub mod hazards;
pub mod path;
pub mod polygon;
pub mod polyline;
