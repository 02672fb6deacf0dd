mod args;
mod builder;
mod template;

pub use args::*;
pub use builder::*;
pub use template::*;
