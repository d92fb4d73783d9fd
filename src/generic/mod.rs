//! Generic structures, not specific to any part of the library.

pub mod cancel;
pub mod index_heap;
pub mod minimal_pcg;
