#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not reach the trivia api: {0}")]
    Request(#[source] reqwest::Error),

    #[error("trivia api returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("trivia api response did not match the expected shape: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("could not build trivia api url: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Transport hiccups and server-side errors are worth retrying; a 4xx or
    /// a malformed body will not get better by asking again.
    pub(super) fn backoff(self) -> backoff::Error<Self> {
        match self {
            Self::Request(_) => backoff::Error::transient(self),
            Self::Status(code) if code.is_server_error() => backoff::Error::transient(self),
            _ => backoff::Error::permanent(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::Error;

    #[test]
    fn server_errors_are_transient() {
        let retried = Error::Status(StatusCode::BAD_GATEWAY).backoff();
        assert!(matches!(retried, backoff::Error::Transient { .. }));
    }

    #[test]
    fn client_errors_are_permanent() {
        let dropped = Error::Status(StatusCode::NOT_FOUND).backoff();
        assert!(matches!(dropped, backoff::Error::Permanent(_)));
    }
}
