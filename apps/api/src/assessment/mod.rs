// Assessment scoring: Big Five quadrants, RIASEC patterns, report text, career matching.
// Every function takes `AssessmentConfig` explicitly; nothing here performs I/O
// except config loading at startup.

pub mod careers;
pub mod config;
pub mod handlers;
pub mod pipeline;
pub mod quadrant;
pub mod report;
pub mod riasec;
pub mod scores;
