pub mod judges;
pub mod scoreboard;
pub mod scores;
pub mod users;
