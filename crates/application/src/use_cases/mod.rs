//! Application use cases (business logic orchestration).

mod generate_template_files;

pub use generate_template_files::*;
