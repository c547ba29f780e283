pub mod help_content;

pub use help_content::all_categories;
