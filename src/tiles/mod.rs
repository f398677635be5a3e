pub mod source;

pub use source::{GoogleMapType, GoogleMutantSource, OpenStreetMapSource, TileSource};
