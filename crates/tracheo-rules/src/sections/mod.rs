pub mod address;
pub mod birth;
pub mod care;
pub mod child;
pub mod guardian;
pub mod respiratory;
pub mod services;
pub mod tracheostomy;
