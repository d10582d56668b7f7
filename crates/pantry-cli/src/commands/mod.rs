pub mod config;
pub mod feedback;
pub mod recipe;

/// Runtime for the async core calls made by a single command.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Runtime::new()?)
}
