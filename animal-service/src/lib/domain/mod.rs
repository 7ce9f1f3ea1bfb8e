pub mod animal;
pub mod user;
