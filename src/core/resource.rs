//! Shared per-resource application state and response envelope

use crate::core::entity::Record;
use crate::core::error::ApiError;
use crate::core::id::IdGenerator;
use crate::core::store::Store;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Success body: `{ "data": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Decode a validated `data` envelope into a typed draft
///
/// Presence checks cannot see type mismatches (`"name": 5`), so a decoding
/// failure is still a client error.
pub fn decode_payload<T: Record, D: DeserializeOwned>(data: Map<String, Value>) -> Result<D, ApiError> {
    serde_json::from_value(Value::Object(data)).map_err(|e| {
        ApiError::validation(format!("{} payload is malformed: {}", T::RESOURCE, e))
    })
}

/// State handed to one resource's handlers
///
/// `C` holds the resource's validation chains. Every mutating handler holds
/// the write gate from the start of its chain until its mutation lands, so a
/// resource never has more than one mutation in flight.
pub struct ResourceState<T: Record, C> {
    pub store: Arc<dyn Store<T>>,
    pub ids: Arc<dyn IdGenerator>,
    pub chains: Arc<C>,
    write_gate: Arc<Mutex<()>>,
}

impl<T: Record, C> ResourceState<T, C> {
    pub fn new(store: Arc<dyn Store<T>>, ids: Arc<dyn IdGenerator>, chains: C) -> Self {
        Self {
            store,
            ids,
            chains: Arc::new(chains),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Wait for exclusive write access to this resource
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_gate.lock().await
    }
}

impl<T: Record, C> Clone for ResourceState<T, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            ids: self.ids.clone(),
            chains: self.chains.clone(),
            write_gate: self.write_gate.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::SequentialIdGenerator;
    use crate::storage::InMemoryStore;
    use std::time::Duration;

    #[derive(Debug, Clone, Serialize)]
    struct Token {
        id: String,
    }

    impl Record for Token {
        const RESOURCE: &'static str = "Token";

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn state() -> ResourceState<Token, ()> {
        ResourceState::new(
            Arc::new(InMemoryStore::<Token>::new()),
            Arc::new(SequentialIdGenerator::new()),
            (),
        )
    }

    #[test]
    fn test_data_response_serialization() {
        let body = serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap();
        assert_eq!(body, serde_json::json!({"data": [1, 2]}));
    }

    #[test]
    fn test_decode_payload_type_mismatch_is_validation_error() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Draft {
            name: String,
        }

        let data = serde_json::json!({"name": 5}).as_object().cloned().unwrap();
        let err = decode_payload::<Token, Draft>(data).unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert!(err.to_string().starts_with("Token payload is malformed"));
    }

    #[tokio::test]
    async fn test_clones_share_write_gate() {
        let state = state();
        let clone = state.clone();

        let guard = state.lock_writes().await;
        let blocked = tokio::time::timeout(Duration::from_millis(20), clone.lock_writes()).await;
        assert!(blocked.is_err(), "second writer must wait");

        drop(guard);
        let acquired = tokio::time::timeout(Duration::from_millis(200), clone.lock_writes()).await;
        assert!(acquired.is_ok());
    }
}
