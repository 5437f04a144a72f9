//! Resource locators and the schemes this loader answers to.
//!
//! A locator has the shape `<scheme>://<package>/<id>` or
//! `<scheme>://<package>/<type>/<name>`. Two schemes are recognized: the
//! generic [`SCHEME_ANDROID_RESOURCE`] and the alternate
//! [`SCHEME_ALT_ANDROID_RESOURCE`]. The alternate scheme exists so that a
//! dispatcher which already routes the generic scheme elsewhere can still
//! send requests here; [`normalize_scheme`] and [`uri_from_resource`] build
//! such locators.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::LoadError;
use crate::platform::Context;
use crate::request::Request;

/// The generic resource scheme.
pub const SCHEME_ANDROID_RESOURCE: &str = "android.resource";

/// The alternate resource scheme.
pub const SCHEME_ALT_ANDROID_RESOURCE: &str = "alt.android.resource";

/// Characters escaped when a path segment is rendered.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A parsed resource locator.
///
/// Path segments are held percent-decoded. Empty path segments are dropped
/// during parsing, so `pkg//42/` has the single segment `42`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    scheme: String,
    authority: Option<String>,
    segments: Vec<String>,
}

impl Locator {
    pub fn new<I, S>(scheme: impl Into<String>, authority: Option<&str>, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scheme: scheme.into(),
            authority: authority.filter(|a| !a.is_empty()).map(str::to_owned),
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Parse locator text.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidLocator` if the text is not a URI, or a
    /// path segment does not decode to UTF-8.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::InvalidLocator(format!("{text}: {reason}"));
        let url = Url::parse(text).map_err(|e| invalid(e.to_string()))?;

        let segments = match url.path_segments() {
            Some(segments) => segments
                .map(|segment| {
                    percent_decode_str(segment)
                        .decode_utf8()
                        .map(|decoded| decoded.into_owned())
                        .map_err(|e| invalid(e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(Self::new(url.scheme(), url.host_str(), segments))
    }

    /// An alternate-scheme locator for resource `id` of the caller's own
    /// package.
    pub fn from_resource(context: &dyn Context, id: i32) -> Self {
        uri_from_resource(context.package_name(), id)
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The package named by the locator, if any.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    pub fn path_segments(&self) -> &[String] {
        &self.segments
    }

    /// The same locator under another scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// True for either of the two resource schemes.
    pub fn is_resource_scheme(&self) -> bool {
        self.scheme == SCHEME_ALT_ANDROID_RESOURCE || self.scheme == SCHEME_ANDROID_RESOURCE
    }
}

impl FromStr for Locator {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        for segment in &self.segments {
            write!(f, "/{}", utf8_percent_encode(segment, SEGMENT))?;
        }
        Ok(())
    }
}

/// Whether this loader is the right handler for `request`.
///
/// A direct resource id is always accepted, whatever the locator says.
pub fn can_handle(request: &Request) -> bool {
    if request.resource_id != 0 {
        return true;
    }
    request
        .locator
        .as_ref()
        .is_some_and(Locator::is_resource_scheme)
}

/// Rewrite a generic-scheme locator to the alternate scheme.
///
/// Any other locator, including one already on the alternate scheme, is
/// returned unchanged.
pub fn normalize_scheme(locator: Locator) -> Locator {
    if locator.scheme == SCHEME_ANDROID_RESOURCE {
        locator.with_scheme(SCHEME_ALT_ANDROID_RESOURCE)
    } else {
        locator
    }
}

/// Build an alternate-scheme locator for a numeric resource id.
pub fn uri_from_resource(package: &str, resource_id: i32) -> Locator {
    Locator::new(
        SCHEME_ALT_ANDROID_RESOURCE,
        Some(package),
        [resource_id.to_string()],
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any direct id is accepted regardless of locator.
        #[test]
        fn prop_direct_id_always_handled(
            id in any::<i32>().prop_filter("non-zero", |id| *id != 0),
            scheme in "[a-z][a-z0-9+.-]{0,12}",
        ) {
            let request = Request::from_id(id)
                .with_locator(Locator::new(scheme, Some("pkg"), ["1"]));
            prop_assert!(can_handle(&request));
        }

        /// Property: unrecognized schemes without an id are rejected.
        #[test]
        fn prop_unknown_scheme_rejected(scheme in "[a-z][a-z0-9+-]{0,12}") {
            let request = Request::from_locator(Locator::new(scheme, Some("pkg"), ["1"]));
            prop_assert!(!can_handle(&request));
        }

        /// Property: ids survive the locator round trip.
        #[test]
        fn prop_uri_from_resource_round_trip(id in any::<i32>()) {
            let text = uri_from_resource("com.example", id).to_string();
            let parsed = Locator::parse(&text).unwrap();
            prop_assert_eq!(parsed.path_segments()[0].parse::<i32>().unwrap(), id);
        }
    }
}
