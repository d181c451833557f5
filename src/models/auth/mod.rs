pub mod entities;
pub mod requests;
pub mod responses;

pub use entities::{Principal, Rol};
pub use requests::LoginRequest;
pub use responses::LoginResponse;
