pub mod cluster;
pub mod protocol;
pub mod qrng_client;
pub mod quantum_source;
pub mod random_source;
pub mod sentence_builder;
pub mod session;
