pub mod animal;
pub mod user;

pub use animal::PostgresAnimalRepository;
pub use user::PostgresUserRepository;
