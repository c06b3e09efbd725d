pub mod health;
pub mod password;
