use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::item_repository::ItemRepository;

pub mod compiler;
pub mod dto;
mod mapper;
pub mod normalizer;
pub(crate) mod pagination;
pub mod service;
pub(crate) mod validator;

#[derive(Clone)]
pub struct ItemService {
    item_repository: Arc<dyn ItemRepository>,
    config: Arc<CoreConfig>,
}

impl ItemService {
    pub fn new(item_repository: Arc<dyn ItemRepository>, config: Arc<CoreConfig>) -> Self {
        Self {
            item_repository,
            config,
        }
    }
}
