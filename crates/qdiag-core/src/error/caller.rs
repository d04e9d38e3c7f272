use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Source location where an error value was constructed.
///
/// Rendered as `<file stem>:<line>`, e.g. `sequences:199`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Caller {
    file: String,
    line: u32,
}

impl Caller {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Capture the location of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        let file = Path::new(location.file())
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("unknown");
        Self::new(file, location.line())
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

impl std::str::FromStr for Caller {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (file, line) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("caller '{}' is not file:line", s))?;
        let line = line
            .parse::<u32>()
            .map_err(|e| format!("caller '{}' has a bad line: {}", s, e))?;
        Ok(Self::new(file, line))
    }
}

impl Serialize for Caller {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Caller {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_uses_file_stem() {
        let caller = Caller::capture();
        assert_eq!(caller.file(), "caller");
        assert!(caller.line() > 0);
    }

    #[test]
    fn test_display_and_parse() {
        let caller = Caller::new("sequences", 199);
        assert_eq!(caller.to_string(), "sequences:199");
        assert_eq!("sequences:199".parse::<Caller>(), Ok(caller));
        assert!("sequences".parse::<Caller>().is_err());
        assert!("sequences:abc".parse::<Caller>().is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Caller::new("plan", 12)).unwrap();
        assert_eq!(json, "\"plan:12\"");
    }
}
