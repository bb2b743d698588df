pub mod domain;
pub mod input;
pub mod scanner;
pub mod sink;

pub use domain::*;
pub use input::*;
pub use scanner::*;
pub use sink::*;
