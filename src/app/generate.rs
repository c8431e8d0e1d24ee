//! Generation request execution

use super::App;
use crate::api::{ApiClient, GenerateRequest};
use crate::store::Event;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Issue one generation request on the runtime. The outcome lands in the
/// inbox as a `ResponseArrived` event. No retry, no timeout, no cancellation:
/// quitting the app simply abandons the task without signaling the server.
fn spawn_request(
    request_id: u64,
    request: GenerateRequest,
    client: ApiClient,
    inbox: Arc<Mutex<Vec<Event>>>,
    ctx: egui::Context,
    runtime: &tokio::runtime::Runtime,
) {
    runtime.spawn(async move {
        let outcome = client.generate(&request).await;
        debug!(request_id, ok = outcome.is_ok(), "Generation response received");
        inbox.lock().unwrap().push(Event::ResponseArrived {
            request_id,
            outcome,
        });
        ctx.request_repaint();
    });
}

impl App {
    pub(crate) fn spawn_generate(
        &self,
        ctx: &egui::Context,
        request_id: u64,
        request: GenerateRequest,
    ) {
        spawn_request(
            request_id,
            request,
            self.client.clone(),
            self.inbox.clone(),
            ctx.clone(),
            &self.runtime,
        );
    }
}
