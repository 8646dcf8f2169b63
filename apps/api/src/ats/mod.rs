// ATS scoring: keyword extraction, fuzzy matching, local score calculation,
// recommendations, and the remote-first scorer orchestration.
// All backend calls go through backend_client.

pub mod calculator;
pub mod fuzzy;
pub mod handlers;
pub mod keywords;
pub mod recommendations;
pub mod scorer;
