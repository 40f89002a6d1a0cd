// Quiz scoring pipeline: answer tally → score normalization → category ranking.
// Pure and synchronous; handlers persist the resulting QuizResult via the profile store.

pub mod catalog;
pub mod handlers;
pub mod ranking;
pub mod scoring;
