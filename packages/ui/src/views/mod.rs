mod generator;
pub use generator::CardGenerator;
