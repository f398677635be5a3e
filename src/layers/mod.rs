pub mod base;
pub mod icons;
pub mod marker;
pub mod overlay;
pub mod registry;
pub mod zone;
