// Command handlers module
pub mod completions;
pub mod track;
pub mod version;

// Re-exports for cleaner imports
pub use track::execute as track;
pub use version::execute as version;
