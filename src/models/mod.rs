pub mod repository;
pub mod commit;
pub mod window;
pub mod report;

pub use repository::*;
pub use commit::*;
pub use window::*;
pub use report::*;
