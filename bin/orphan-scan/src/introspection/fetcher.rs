use graphql_tools::introspection::IntrospectionQuery;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::introspection::query::INTROSPECTION_QUERY;

const SCANNER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, thiserror::Error)]
pub enum FetchIntrospectionError {
    #[error("Creating HTTP Client failed: {0}")]
    HTTPClientCreation(reqwest::Error),
    #[error("Network error: {0}")]
    Network(reqwest::Error),
    #[error("Endpoint responded with HTTP status {0}")]
    ErrorStatus(reqwest::StatusCode),
    #[error("Reading response body failed: {0}")]
    ResponseRead(reqwest::Error),
    #[error("Endpoint returned GraphQL errors: {0}")]
    GraphQLErrors(String),
    #[error("Response carries no data")]
    MissingData,
    #[error("Response data is not an introspection result: {0}")]
    ResponseParse(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct GraphQLRequest {
    query: &'static str,
}

#[derive(Deserialize)]
struct GraphQLResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize)]
struct GraphQLError {
    message: String,
}

pub struct IntrospectionFetcher {
    client: reqwest::Client,
}

impl IntrospectionFetcher {
    pub fn try_new() -> Result<Self, FetchIntrospectionError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("schema-orphans/{}", SCANNER_VERSION))
            .build()
            .map_err(FetchIntrospectionError::HTTPClientCreation)?;

        Ok(Self { client })
    }

    /// Sends the introspection query and deserializes the result.
    /// One shot, no retries.
    pub async fn fetch(&self, url: &str) -> Result<IntrospectionQuery, FetchIntrospectionError> {
        let response = self
            .client
            .post(url)
            .json(&GraphQLRequest {
                query: INTROSPECTION_QUERY,
            })
            .send()
            .await
            .map_err(FetchIntrospectionError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchIntrospectionError::ErrorStatus(status));
        }

        let body: GraphQLResponse = response
            .json()
            .await
            .map_err(FetchIntrospectionError::ResponseRead)?;

        if let Some(errors) = body.errors {
            if !errors.is_empty() {
                let messages = errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(FetchIntrospectionError::GraphQLErrors(messages));
            }
        }

        let data = body.data.ok_or(FetchIntrospectionError::MissingData)?;
        let introspection: IntrospectionQuery = serde_json::from_value(data)?;
        debug!(
            types = introspection.__schema.types.len(),
            "Introspection result parsed"
        );

        Ok(introspection)
    }
}
