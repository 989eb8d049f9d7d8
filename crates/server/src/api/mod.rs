#[cfg(feature = "server")]
pub(crate) mod context;

mod auth;
pub use auth::*;

mod user;
pub use user::*;

mod role;
pub use role::*;

mod complaint;
pub use complaint::*;

mod notice;
pub use notice::*;

mod attendance;
pub use attendance::*;

mod assignment;
pub use assignment::*;

mod qna;
pub use qna::*;

mod dashboard;
pub use dashboard::*;
