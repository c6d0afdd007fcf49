pub mod frame;
pub mod sampler;

pub use frame::{Renderer, Scale};
pub use sampler::{Sampled, downsample};
