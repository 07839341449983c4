// Application layer - Use case interactors

pub mod container;
pub mod plan_interactor;
pub mod trim_interactor;

// Re-export interactors
pub use container::{AppContainer, DefaultAppContainer};
pub use plan_interactor::{PlanInteractor, PlanRequest, TrimPlan};
pub use trim_interactor::{TrimInteractor, TrimRequest, TrimResponse};
