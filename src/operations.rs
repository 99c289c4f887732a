use crate::api::RequestExecutor;
use crate::error::{Context7Error, Result};
use serde_json::Value;

pub const SEARCH_PATH: &str = "/libs/search";
pub const CONTEXT_PATH: &str = "/context";

/// Look up libraries matching `library_name`, ranked against `query`.
pub async fn search_library(
    executor: &dyn RequestExecutor,
    library_name: &str,
    query: &str,
) -> Result<Value> {
    require("libraryName", library_name)?;
    require("query", query)?;

    executor
        .get(
            SEARCH_PATH,
            &[("libraryName", library_name), ("query", query)],
        )
        .await
}

/// Fetch documentation context for a library id such as `/facebook/react`.
pub async fn get_context(
    executor: &dyn RequestExecutor,
    library_id: &str,
    query: &str,
) -> Result<Value> {
    require("libraryId", library_id)?;
    require("query", query)?;

    executor
        .get(
            CONTEXT_PATH,
            &[("libraryId", library_id), ("query", query), ("type", "json")],
        )
        .await
}

fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        Err(Context7Error::MissingArgument(name))
    } else {
        Ok(())
    }
}
