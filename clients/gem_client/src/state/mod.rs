mod gem;
mod reader;

pub use gem::*;
pub use reader::*;
