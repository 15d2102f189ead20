// Application layer - Use case interactors

pub mod batch_interactor;
pub mod compose_interactor;
pub mod container;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export interactors
pub use batch_interactor::BatchInteractor;
pub use compose_interactor::ComposeInteractor;
pub use container::{AppContainer, DefaultAppContainer, ToolPaths};
