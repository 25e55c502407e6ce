//! Bridge between the UI thread and the async API client.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

use crate::api::ApiClient;
use crate::repo::{self, ApiCall};
use crate::ui::events::{ApiReply, AppEvent};

/// A queued call, tagged with the epoch of the screen that asked.
#[derive(Debug)]
pub struct ApiRequest {
    pub epoch: u64,
    pub call: ApiCall,
}

/// Runs on the tokio runtime. Each request gets its own task so one
/// slow call never delays the next.
pub async fn run(mut rx: Receiver<ApiRequest>, client: Arc<ApiClient>, events: Sender<AppEvent>) {
    while let Some(request) = rx.recv().await {
        let client = Arc::clone(&client);
        let events = events.clone();
        tokio::spawn(async move {
            let outcome = repo::execute(&client, request.call).await;
            let _ = events.send(AppEvent::Api(ApiReply {
                epoch: request.epoch,
                outcome,
            }));
        });
    }
}
