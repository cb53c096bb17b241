// src/domain/pagination.rs

use crate::errors::ServerError;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// A validated `page`/`limit` pair. Both are at least 1; `from_query` is the only way in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        Ok(Self {
            page: positive_param(params, "page", DEFAULT_PAGE)?,
            limit: positive_param(params, "limit", DEFAULT_LIMIT)?,
        })
    }
}

fn positive_param(
    params: &HashMap<String, String>,
    key: &str,
    default: u32,
) -> Result<u32, ServerError> {
    match params.get(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ServerError::BadRequest(format!(
                "{key} must be a positive integer"
            ))),
        },
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(rename = "properties")]
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Slices `[(page - 1) * limit, page * limit)` out of `items`. Pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], req: PageRequest) -> Page<T> {
    let limit = req.limit.max(1) as usize;
    let start = (req.page as usize).saturating_sub(1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(items.len());

    let slice = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: slice,
        current_page: req.page,
        total_pages: items.len().div_ceil(limit) as u32,
    }
}
