pub mod account;
pub mod auth;
pub mod dash_home;
pub mod home;
pub mod login;
pub mod register;
pub mod zone;
pub mod zones;
