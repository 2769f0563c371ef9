mod date_range;
mod media;

pub use date_range::*;
pub use media::*;
