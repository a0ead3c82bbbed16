//! HTTP API Client
//!
//! Functions for communicating with the campus student-management REST API.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::state::roster::{Student, StudentForm};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("campus_admin_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

/// Aggregate counts and recent additions from `GET /analytics`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AnalyticsSummary {
    pub total_students: u64,
    #[serde(default)]
    pub by_department: HashMap<String, u64>,
    #[serde(default)]
    pub recent_onboarded: Vec<RecentStudent>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct RecentStudent {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Send a chat message and wait for the complete reply (non-streaming mode)
pub async fn send_chat(message: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/chat", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: ChatReply = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.reply)
}

/// Fetch the full student roster
pub async fn fetch_students() -> Result<Vec<Student>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/students", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    let result: StudentListResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.students)
}

/// Create a new student record
pub async fn create_student(form: &StudentForm) -> Result<Student, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/students", api_base))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Update an existing student record
pub async fn update_student(id: &str, form: &StudentForm) -> Result<Student, String> {
    let api_base = get_api_base();

    let response = Request::put(&format!("{}/students/{}", api_base, id))
        .json(form)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a student record
pub async fn delete_student(id: &str) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/students/{}", api_base, id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Delete failed".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Fetch the analytics summary
pub async fn fetch_analytics() -> Result<AnalyticsSummary, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/analytics", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_summary_defaults_optional_sections() {
        let summary: AnalyticsSummary =
            serde_json::from_str(r#"{"total_students": 42}"#).unwrap();
        assert_eq!(summary.total_students, 42);
        assert!(summary.by_department.is_empty());
        assert!(summary.recent_onboarded.is_empty());
    }

    #[test]
    fn analytics_summary_parses_full_payload() {
        let json = r#"{
            "total_students": 3,
            "by_department": {"Engineering": 2, "Arts": 1},
            "recent_onboarded": [
                {"id": "s1", "name": "Alice Khan", "email": "alice@campus.edu"}
            ]
        }"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.by_department["Engineering"], 2);
        assert_eq!(summary.recent_onboarded[0].name, "Alice Khan");
    }

    #[test]
    fn student_list_tolerates_missing_optional_fields() {
        let json = r#"{"students": [{"id": "s1", "name": "Carol Ng", "email": "carol@campus.edu"}]}"#;
        let result: StudentListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(result.students.len(), 1);
        assert!(result.students[0].department.is_none());
    }
}
