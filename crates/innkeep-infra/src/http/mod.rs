//! REST adapters for the backend API. One `ApiClient` implements every API port.

mod admin;
mod auth;
mod client;
mod hotels;
mod reservations;

pub use client::ApiClient;

/// Percent-encode a path segment taken from an identifier.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_escapes_reserved_characters() {
        assert_eq!(segment("65a1f0c2"), "65a1f0c2");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
        assert_eq!(segment("r?x=1#y"), "r%3Fx%3D1%23y");
    }
}
