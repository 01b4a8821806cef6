//! Error kind enumeration for categorizing bootstrap errors.

/// Categorization of bootstrap errors.
///
/// The kinds fall into three groups that drive how the provisioner reacts:
///
/// | Group                | Kinds                                     | Effect                         |
/// |----------------------|-------------------------------------------|--------------------------------|
/// | Transport            | `Connection`, `Timeout`, `Transport`      | fatal before creation, per-collection failure during it |
/// | Fatal precondition   | `Unhealthy`, `UnexpectedStatus`           | aborts the run                 |
/// | Local / setup        | `InvalidArgument`, `Configuration`, `Unauthorized`, `InvalidResponse` | reported where raised |
///
/// A non-2xx HTTP status is never an error at the transport level; it only
/// becomes one when a caller decides the status is unacceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Invalid argument supplied by the caller (e.g. an unsupported HTTP method).
    #[error("invalid argument")]
    InvalidArgument,

    /// Configuration error (invalid base URL, unreadable CA certificate).
    #[error("configuration error")]
    Configuration,

    /// Admin authentication was rejected by the service.
    ///
    /// HTTP: 400/401 from `/admins/auth-with-password`
    #[error("unauthorized")]
    Unauthorized,

    /// Connection error (DNS, refused, TLS handshake).
    #[error("connection error")]
    Connection,

    /// Request timed out on the client side.
    #[error("timeout")]
    Timeout,

    /// Any other failure to complete the HTTP exchange.
    #[error("transport error")]
    Transport,

    /// A successful response whose body could not be understood.
    #[error("invalid response")]
    InvalidResponse,

    /// The liveness endpoint did not report healthy.
    #[error("service unhealthy")]
    Unhealthy,

    /// An endpoint answered with a status the run cannot continue from.
    #[error("unexpected status")]
    UnexpectedStatus,
}

impl ErrorKind {
    /// Returns `true` if the HTTP call itself could not be completed.
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::Connection | ErrorKind::Timeout | ErrorKind::Transport
        )
    }

    /// Returns `true` for the kinds that abort a provisioning run before any
    /// collection is attempted.
    #[inline]
    pub fn is_fatal_precondition(&self) -> bool {
        matches!(self, ErrorKind::Unhealthy | ErrorKind::UnexpectedStatus)
    }
}
