use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A three-part `major.minor.patch` version.
///
/// Components compare numerically, so `1.10.0 > 1.9.9`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("invalid version '{0}', expected 'X.Y.Z'")]
    Shape(String),
    #[error("invalid {component} component '{value}' in version")]
    Component {
        component: &'static str,
        value: String,
    },
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The `0.0.0` version, used when nothing has been recorded yet.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let parts: Vec<&str> = text.split('.').collect();
        let [major, minor, patch] = parts[..] else {
            return Err(VersionError::Shape(text.to_string()));
        };
        let component = |name: &'static str, value: &str| {
            value.parse::<u32>().map_err(|_| VersionError::Component {
                component: name,
                value: value.to_string(),
            })
        };
        Ok(Self::new(
            component("major", major)?,
            component("minor", minor)?,
            component("patch", patch)?,
        ))
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(Version::zero().is_zero());
        assert_eq!(Version::zero().to_string(), "0.0.0");
        assert!(!Version::new(0, 0, 1).is_zero());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 9.10.0 ".parse::<Version>(), Ok(Version::new(9, 10, 0)));
    }

    #[test]
    fn test_parse_errors_name_the_problem() {
        assert_eq!(
            "9.10".parse::<Version>(),
            Err(VersionError::Shape("9.10".into()))
        );
        assert_eq!(
            "9.x.0".parse::<Version>(),
            Err(VersionError::Component {
                component: "minor",
                value: "x".into()
            })
        );
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("-1.0.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(Version::new(1, 10, 0) > Version::new(1, 9, 9));
        assert!(Version::new(2, 0, 0) > Version::new(1, 99, 99));
        assert!(Version::zero() < Version::new(0, 0, 1));
    }

    #[test]
    fn test_toml_string_form() {
        #[derive(Serialize, Deserialize)]
        struct Record {
            producer_version: Version,
        }
        let text = toml::to_string(&Record {
            producer_version: Version::new(9, 10, 0),
        })
        .unwrap();
        assert_eq!(text.trim(), r#"producer_version = "9.10.0""#);

        let back: Record = toml::from_str(&text).unwrap();
        assert_eq!(back.producer_version, Version::new(9, 10, 0));
        assert!(toml::from_str::<Record>(r#"producer_version = "9.10""#).is_err());
    }
}
