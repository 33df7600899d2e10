use crate::api::RestaurantApi;
use crate::restaurant::RestaurantPayload;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    CreateRestaurant { payload: RestaurantPayload },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    api: &'a RestaurantApi,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, api: &'a RestaurantApi) -> Self {
        Handler { state, api }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::CreateRestaurant { payload } => self.create_restaurant(payload).await?,
        }
        Ok(())
    }

    /// Post the restaurant and report the outcome to state. A failed request
    /// leaves the draft in place and is returned as an error.
    ///
    async fn create_restaurant(&mut self, payload: RestaurantPayload) -> Result<()> {
        info!(
            "Creating restaurant '{}' (ID {})...",
            payload.restaurant.name, payload.restaurant_id
        );
        match self.api.create_restaurant(&payload).await {
            Ok(()) => {
                let mut state = self.state.lock().await;
                state.complete_submission(&payload);
                info!("Created restaurant '{}'.", payload.restaurant.name);
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.lock().await;
                state.fail_submission();
                Err(err.into())
            }
        }
    }
}
