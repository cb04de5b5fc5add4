/// A high-level error kind used to decide how the error should be reported to the client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The error caused by the client (e.g. malformed request parameters).
    ClientError,
    /// The client isn't allowed to perform the requested operation.
    #[allow(dead_code)]
    AccessForbidden,
    /// Any error that we don't expose to the client.
    Unknown,
}
