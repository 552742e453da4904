pub mod agent;
pub mod errors;
pub mod models;
pub mod outcome;
pub mod prompt_template;
pub mod providers;
pub mod report;
pub mod search;
pub mod tools;
