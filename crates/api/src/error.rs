use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterApiError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to `{url}` failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("backend returned status {status} for `{url}`")]
    Status { url: String, status: u16, body: String },
    #[error("could not decode sales-rep payload: {0}")]
    Decode(#[source] serde_json::Error),
}
