use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard failure envelope: `{"success": false, "error": …}`.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Standard success envelope for a single resource.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DataDto<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Standard success envelope for collections, with an element count.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ListDto<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListDto<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Success envelope carrying only a human-readable message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
