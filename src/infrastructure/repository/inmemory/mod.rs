pub mod registry;

pub use registry::InMemorySessionRegistry;
