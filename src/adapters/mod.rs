// Adapters layer: concrete implementations behind the domain ports.

pub mod ranking;
