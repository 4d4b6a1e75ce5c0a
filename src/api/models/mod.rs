mod beer;
mod label;
mod user;
mod favorite;
mod credentials;
mod error_body;
mod operation_result;

pub use beer::*;
pub use label::*;
pub use user::*;
pub use favorite::*;
pub use credentials::*;
pub use error_body::*;
pub use operation_result::*;
