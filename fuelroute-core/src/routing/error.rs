use thiserror::Error;

/// The route could not be obtained.
///
/// All variants mean the same thing to callers; they differ only in the
/// diagnostic detail carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The request did not complete within the client timeout.
    #[error("could not obtain the route: request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("could not obtain the route: {url} returned HTTP {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description from the client.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("could not obtain the route: request to {url} failed: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error description from the client.
        message: String,
    },
    /// The service responded but reported an error code.
    #[error("could not obtain the route: routing service answered {code}: {message}")]
    ServiceError {
        /// Service status code, e.g. `"NoRoute"`.
        code: String,
        /// Service message, possibly empty.
        message: String,
    },
    /// The response body could not be interpreted.
    #[error("could not obtain the route: malformed response: {message}")]
    ParseError {
        /// What was wrong with the body.
        message: String,
    },
    /// The service succeeded but returned no routes.
    #[error("could not obtain the route: the routing service returned no routes")]
    NoRoute,
}
