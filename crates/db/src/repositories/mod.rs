pub mod character_repo;
pub mod quest_repo;

pub use character_repo::CharacterRepo;
pub use quest_repo::QuestRepo;
