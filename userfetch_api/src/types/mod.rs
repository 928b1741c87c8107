mod user;
pub use self::user::{Address, Company, Geo, User};
