use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, LocalFsAdapter, TomlConfigAdapter};
use crate::app::{plan_interactor::PlanInteractor, trim_interactor::TrimInteractor};
use crate::ports::{ConfigPort, ExecutePort, FsPort};

pub trait AppContainer: Send + Sync {
    fn trim_interactor(&self) -> Arc<TrimInteractor>;
    fn plan_interactor(&self) -> Arc<PlanInteractor>;
    fn config_port(&self) -> Arc<dyn ConfigPort>;
}

pub struct DefaultAppContainer {
    trim_interactor: Arc<TrimInteractor>,
    plan_interactor: Arc<PlanInteractor>,
    config_port: Arc<dyn ConfigPort>,
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultAppContainer {
    pub fn new() -> Self {
        Self::with_ports(
            Arc::new(FFmpegAdapter::new()),
            Arc::new(LocalFsAdapter::new()),
            Arc::new(TomlConfigAdapter::new()),
        )
    }

    /// Wire the interactors to explicit port implementations
    pub fn with_ports(
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        config_port: Arc<dyn ConfigPort>,
    ) -> Self {
        let trim_interactor = Arc::new(TrimInteractor::new(
            Arc::clone(&execute_port),
            Arc::clone(&fs_port),
        ));
        let plan_interactor = Arc::new(PlanInteractor::new(Arc::clone(&fs_port)));

        Self {
            trim_interactor,
            plan_interactor,
            config_port,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn trim_interactor(&self) -> Arc<TrimInteractor> {
        Arc::clone(&self.trim_interactor)
    }

    fn plan_interactor(&self) -> Arc<PlanInteractor> {
        Arc::clone(&self.plan_interactor)
    }

    fn config_port(&self) -> Arc<dyn ConfigPort> {
        Arc::clone(&self.config_port)
    }
}
