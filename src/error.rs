use std::io;
use thiserror::Error;

/// Failure of a single per-volume query against the metrics provider.
///
/// None of these are fatal: callers drop the affected metric for the current
/// tick (or the volume for good, at enumeration time) and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

impl ProbeError {
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ProbeError::Other(msg.into())
    }
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied(e.to_string()),
            io::ErrorKind::NotFound         => ProbeError::NotFound(e.to_string()),
            _                               => ProbeError::Other(e.to_string()),
        }
    }
}

#[cfg(unix)]
impl From<nix::errno::Errno> for ProbeError {
    fn from(e: nix::errno::Errno) -> Self {
        use nix::errno::Errno;
        match e {
            Errno::EACCES | Errno::EPERM  => ProbeError::PermissionDenied(e.desc().to_string()),
            Errno::ENOENT | Errno::ENOTDIR => ProbeError::NotFound(e.desc().to_string()),
            _                              => ProbeError::Other(e.desc().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_kinds_map_to_probe_errors() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(ProbeError::from(denied), ProbeError::PermissionDenied(_)));

        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(ProbeError::from(missing), ProbeError::NotFound(_)));

        let other = io::Error::new(io::ErrorKind::Interrupted, "eintr");
        assert!(matches!(ProbeError::from(other), ProbeError::Other(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_errno_maps_to_probe_errors() {
        use nix::errno::Errno;
        assert!(matches!(ProbeError::from(Errno::EACCES), ProbeError::PermissionDenied(_)));
        assert!(matches!(ProbeError::from(Errno::ENOENT), ProbeError::NotFound(_)));
        assert!(matches!(ProbeError::from(Errno::EIO), ProbeError::Other(_)));
    }
}
