mod judge;
mod score;
mod user;

pub use judge::Judge;
pub use score::Score;
pub use user::User;
