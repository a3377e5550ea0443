//! The stateful transform engines: one direction per engine, one workspace
//! per engine, constructed together at backend creation and torn down
//! together at destruction. Neither engine is internally synchronized; the
//! `&mut self` transform methods encode the at-most-one-in-flight rule.

pub mod compress;
pub mod decompress;

pub use compress::CompressEngine;
pub use decompress::DecompressEngine;
