#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::core_config::CoreConfig;
use repository::item_repository::ItemRepository;
use service::item::ItemService;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;

/// Storage backend the core operates on
pub trait DataRepository: Send + Sync {
    fn get_item_repository(&self) -> Arc<dyn ItemRepository>;
}

#[derive(Clone)]
pub struct GridCore {
    pub item_service: ItemService,
    pub config: Arc<CoreConfig>,
}

impl GridCore {
    pub fn new(data_provider: Arc<dyn DataRepository>, config: CoreConfig) -> Self {
        let config = Arc::new(config);

        Self {
            item_service: ItemService::new(data_provider.get_item_repository(), config.clone()),
            config,
        }
    }
}
