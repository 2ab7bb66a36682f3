pub mod qrng_payload;
pub mod template;
pub mod word_list;
