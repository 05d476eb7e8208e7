// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::Path;
use std::sync::{Arc, Mutex};

use regdocs::application::usecases::fetch_documents::FetchDocumentsUseCase;
use regdocs::config::ScraperConfiguration;
use regdocs::domain::services::observer::{FetchEvent, FetchObserver};
use regdocs::engines::reqwest_engine::ReqwestTransport;
use regdocs::infrastructure::storage::LocalStorage;

/// 记录所有事件的观察者
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<FetchEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<FetchEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl FetchObserver for RecordingObserver {
    fn on_event(&self, event: &FetchEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// 指向桩服务、无节流的配置
pub fn test_config(base_url: &str, storage: &Path) -> ScraperConfiguration {
    ScraperConfiguration {
        target_base_url: base_url.to_string(),
        search_endpoint: "/online_services/search/by_title/_Business_Registration".to_string(),
        request_delay_seconds: 0.0,
        retry_backoff_seconds: 0.001,
        max_retry_attempts: 2,
        connection_timeout: 5,
        ..ScraperConfiguration::default()
    }
    .with_storage_directory(storage)
}

/// 用真实传输层与本地存储装配流水线
pub async fn build_pipeline(
    config: &ScraperConfiguration,
) -> (FetchDocumentsUseCase, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    let transport = Arc::new(
        ReqwestTransport::new(config)
            .unwrap()
            .with_observer(observer.clone()),
    );
    let storage = Arc::new(LocalStorage::open(&config.storage_directory).await.unwrap());
    let pipeline =
        FetchDocumentsUseCase::new(config, transport, storage, observer.clone()).unwrap();
    (pipeline, observer)
}
