pub mod movie;
pub mod query;

pub use movie::{Movie, MovieId};
pub use query::MovieQuery;
