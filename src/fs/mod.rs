pub mod object;
mod repo;

pub use repo::Repository;
