// Career matching: quiz result + interests → job categories → search terms,
// plus relevance ranking of listings returned by job boards.

pub mod handlers;
pub mod mapper;
pub mod mapping;
pub mod relevance;
pub mod search_terms;
