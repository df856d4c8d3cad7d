pub mod interactive;
pub mod matrix;
pub mod suggest;
