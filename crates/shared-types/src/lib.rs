pub mod common;
pub mod error;
pub mod feature_flags;
pub mod list_state;
pub mod models;

#[cfg(feature = "validation")]
pub mod validate;

// School domain modules
pub mod assignment;
pub mod attendance;
pub mod complaint;
pub mod dashboard;
pub mod notice;
pub mod qna;
pub mod role;
pub mod upload;
pub mod user;

pub use common::*;
pub use error::*;
pub use feature_flags::*;
pub use list_state::*;
pub use models::*;

#[cfg(feature = "validation")]
pub use validate::*;

pub use assignment::*;
pub use attendance::*;
pub use complaint::*;
pub use dashboard::*;
pub use notice::*;
pub use qna::*;
pub use role::*;
pub use upload::*;
pub use user::*;
