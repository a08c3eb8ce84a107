// Library exports for testing
pub mod assets;
pub mod constants;
pub mod generator;
