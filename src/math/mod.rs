mod vector;

pub use vector::Vector2;
