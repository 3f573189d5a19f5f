//! Abstract interfaces shared by the matrix container and its consumers

pub mod element;

pub use element::MatrixElement;
