pub mod constants;
pub mod content;
pub mod motion;
pub mod nav;
pub mod pointer;
pub mod sections;

pub use constants::*;
pub use content::*;
pub use motion::*;
pub use nav::*;
pub use pointer::*;
pub use sections::*;
