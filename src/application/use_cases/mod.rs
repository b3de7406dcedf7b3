/// Use cases module containing application business logic orchestration
mod generate_lists;

pub use generate_lists::GenerateListsUseCase;
