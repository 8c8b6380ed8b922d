pub mod http;
pub mod params;
