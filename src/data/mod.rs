pub mod models;
pub mod provider;

pub use models::{ClientConfig, LocationRecord, ZoneRecord};
pub use provider::{ConfigProvider, GeoDataProvider, HttpApi, SampleGeoData};
