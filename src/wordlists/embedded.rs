//! Embedded vocabulary
//!
//! Word table compiled into the binary at build time.

// Include generated word table from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
