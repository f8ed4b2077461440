pub mod character;
pub mod quest;
