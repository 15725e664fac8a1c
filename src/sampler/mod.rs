pub mod enumerate;
pub mod identity;
pub mod rate;
pub mod tick;

pub use identity::Platform;
pub use tick::Sampler;
