pub mod calibrate;
pub mod darkness;
pub mod raster;
