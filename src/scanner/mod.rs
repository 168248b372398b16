pub mod ignore_rules;
pub mod walker;

pub use ignore_rules::{IgnoreRules, translate_gitignore_line};
pub use walker::scan;
