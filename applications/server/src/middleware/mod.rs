/// HTTP middleware
pub mod problem;

pub use problem::problem_instance;
