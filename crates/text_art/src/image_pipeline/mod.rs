pub mod average;
pub mod block;
pub mod buffer;
pub mod loader;
