//! HTTP Task Service
//!
//! `fetch` bindings to the task service's JSON endpoints.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::TaskService;
use crate::error::{js_message, ServiceError};
use crate::models::{NewTask, Task, TaskEdit, TaskId};

// ========================
// Response Bodies
// ========================

#[derive(Deserialize)]
struct TaskIdBody {
    task_id: TaskId,
}

#[derive(Deserialize)]
struct CompletedBody {
    completed: bool,
}

/// Task service reached over HTTP
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTaskService {
    base_url: String,
}

impl HttpTaskService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, route: &str, id: Option<&TaskId>) -> String {
        match id {
            Some(id) => format!(
                "{}/{}/{}",
                self.base_url,
                route,
                utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC)
            ),
            None => format!("{}/{}", self.base_url, route),
        }
    }

    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<Response, ServiceError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        let has_body = body.is_some();
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let request =
            Request::new_with_str_and_init(url, &opts).map_err(ServiceError::transport)?;
        if has_body {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(ServiceError::transport)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| ServiceError::Transport("no window available".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(ServiceError::transport)?;
        let response: Response = value
            .dyn_into()
            .map_err(|v| ServiceError::Decode(js_message(&v)))?;

        if !response.ok() {
            let body = match response.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            log::warn!("{method} {url} -> {}", response.status());
            return Err(ServiceError::Status { status: response.status(), body });
        }
        Ok(response)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, ServiceError> {
        let body = body
            .map(|b| serde_json::to_string(b).map_err(ServiceError::decode))
            .transpose()?;
        let response = self.send(method, url, body).await?;
        let promise = response.json().map_err(ServiceError::transport)?;
        let value = JsFuture::from(promise).await.map_err(ServiceError::transport)?;
        serde_wasm_bindgen::from_value(value).map_err(ServiceError::decode)
    }
}

impl TaskService for HttpTaskService {
    async fn list_tasks(&self) -> Result<Vec<Task>, ServiceError> {
        self.send_json::<(), _>("GET", &self.url("get_tasks", None), None)
            .await
    }

    async fn create_task(&self, new_task: &NewTask) -> Result<Task, ServiceError> {
        let body: TaskIdBody = self
            .send_json("POST", &self.url("add_task", None), Some(new_task))
            .await?;
        let mut task = Task::new(body.task_id, new_task.name.clone(), new_task.parent.clone());
        task.description = new_task.description.clone();
        Ok(task)
    }

    async fn update_task(&self, current: &Task, edit: &TaskEdit) -> Result<Task, ServiceError> {
        let _: TaskIdBody = self
            .send_json("PUT", &self.url("update_task", Some(&current.id)), Some(edit))
            .await?;
        Ok(edit.apply_to(current))
    }

    async fn toggle_completion(&self, id: &TaskId) -> Result<bool, ServiceError> {
        let body: CompletedBody = self
            .send_json::<(), _>("PUT", &self.url("toggle_task_completion", Some(id)), None)
            .await?;
        Ok(body.completed)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ServiceError> {
        self.send("DELETE", &self.url("delete_task", Some(id)), None)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_join_base_route_and_encoded_id() {
        let service = HttpTaskService::new("http://localhost:5000");

        assert_eq!(service.url("get_tasks", None), "http://localhost:5000/get_tasks");
        assert_eq!(
            service.url("delete_task", Some(&TaskId::from("a b/c"))),
            "http://localhost:5000/delete_task/a%20b%2Fc"
        );
        assert_eq!(
            service.url("update_task", Some(&TaskId::from("3f2a9c"))),
            "http://localhost:5000/update_task/3f2a9c"
        );
    }
}
