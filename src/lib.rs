pub mod blog;
pub mod error;
pub mod navigation;
pub mod parsing;
pub mod plugin;
pub mod related;
pub mod store;
pub mod summary;
pub mod tags;
pub mod templating;
pub mod types;

pub use blog::*;
pub use error::*;
pub use navigation::*;
pub use parsing::*;
pub use plugin::*;
pub use related::*;
pub use store::*;
pub use summary::*;
pub use tags::*;
pub use templating::*;
pub use types::*;
