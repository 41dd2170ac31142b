pub mod auth;
pub mod booking;
pub mod cashes;
pub mod health;
pub mod ranges;
pub mod transfers;
