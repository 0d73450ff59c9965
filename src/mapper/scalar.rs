use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
    str::{FromStr, Utf8Error},
};

use thiserror::Error;

use crate::error::ConfigError;

/// Type tag naming the scalar a mapper produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// `bool`, from `true`/`false` in any letter case.
    Boolean,
    /// `i16`.
    Short,
    /// `i32`.
    Int,
    /// `i64`.
    Long,
    /// `f32`.
    Float,
    /// `f64`.
    Double,
    /// UTF-8 text taken as-is.
    String,
}

impl ScalarType {
    /// Every builtin scalar type.
    pub const ALL: [ScalarType; 7] = [
        ScalarType::Boolean,
        ScalarType::Short,
        ScalarType::Int,
        ScalarType::Long,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::String,
    ];

    /// Type identifier used in column configuration.
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Boolean => "boolean",
            ScalarType::Short => "short",
            ScalarType::Int => "int",
            ScalarType::Long => "long",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::String => "string",
        }
    }

    /// Parse `input` as this type.
    pub fn parse(self, input: &[u8]) -> Result<Scalar, ParseFailure> {
        let text = std::str::from_utf8(input)?;
        Ok(match self {
            ScalarType::Boolean => Scalar::Boolean(parse_bool(text)?),
            ScalarType::Short => Scalar::Short(text.parse()?),
            ScalarType::Int => Scalar::Int(text.parse()?),
            ScalarType::Long => Scalar::Long(text.parse()?),
            ScalarType::Float => Scalar::Float(text.parse()?),
            ScalarType::Double => Scalar::Double(text.parse()?),
            ScalarType::String => Scalar::String(text.to_owned()),
        })
    }
}

fn parse_bool(text: &str) -> Result<bool, ParseFailure> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ParseFailure::Boolean)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ScalarType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConfigError::UnknownScalarType(s.to_string()))
    }
}

/// One typed value ready to be indexed.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// See [`ScalarType::Boolean`].
    Boolean(bool),
    /// See [`ScalarType::Short`].
    Short(i16),
    /// See [`ScalarType::Int`].
    Int(i32),
    /// See [`ScalarType::Long`].
    Long(i64),
    /// See [`ScalarType::Float`].
    Float(f32),
    /// See [`ScalarType::Double`].
    Double(f64),
    /// See [`ScalarType::String`].
    String(String),
}

impl Scalar {
    /// The type tag of this value.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::Boolean(_) => ScalarType::Boolean,
            Scalar::Short(_) => ScalarType::Short,
            Scalar::Int(_) => ScalarType::Int,
            Scalar::Long(_) => ScalarType::Long,
            Scalar::Float(_) => ScalarType::Float,
            Scalar::Double(_) => ScalarType::Double,
            Scalar::String(_) => ScalarType::String,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Boolean(v) => write!(f, "{v}"),
            Scalar::Short(v) => write!(f, "{v}"),
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Long(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Double(v) => write!(f, "{v}"),
            Scalar::String(v) => f.write_str(v),
        }
    }
}

/// Why a field's text could not be read as the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The bytes are not UTF-8 text.
    #[error("not valid text: {0}")]
    NotText(#[from] Utf8Error),
    /// Anything other than `true`/`false`.
    #[error("expected `true` or `false`")]
    Boolean,
    /// Not a decimal integer in range.
    #[error("invalid integer: {0}")]
    Integer(#[from] ParseIntError),
    /// Not a floating point number.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_is_strict_and_case_insensitive() {
        assert_eq!(ScalarType::Boolean.parse(b"true"), Ok(Scalar::Boolean(true)));
        assert_eq!(ScalarType::Boolean.parse(b"TRUE"), Ok(Scalar::Boolean(true)));
        assert_eq!(ScalarType::Boolean.parse(b"False"), Ok(Scalar::Boolean(false)));
        let bad_inputs: [&[u8]; 5] = [b"notabool", b"", b" true", b"1", b"yes"];
        for bad in bad_inputs {
            assert_eq!(ScalarType::Boolean.parse(bad), Err(ParseFailure::Boolean));
        }
    }

    #[test]
    fn short_requires_in_range_numeral() {
        assert_eq!(ScalarType::Short.parse(b"32000"), Ok(Scalar::Short(32000)));
        assert_eq!(ScalarType::Short.parse(b"-32768"), Ok(Scalar::Short(i16::MIN)));
        assert_eq!(ScalarType::Short.parse(b"+7"), Ok(Scalar::Short(7)));
        let bad_inputs: [&[u8]; 6] = [b"abc", b"99999", b"", b" 1", b"1.0", b"0x10"];
        for bad in bad_inputs {
            assert!(
                matches!(ScalarType::Short.parse(bad), Err(ParseFailure::Integer(_))),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn wider_numbers() {
        assert_eq!(ScalarType::Int.parse(b"-70000"), Ok(Scalar::Int(-70000)));
        assert_eq!(
            ScalarType::Long.parse(b"9007199254740993"),
            Ok(Scalar::Long(9_007_199_254_740_993))
        );
        assert_eq!(ScalarType::Double.parse(b"2.5e3"), Ok(Scalar::Double(2500.0)));
        assert_eq!(ScalarType::Float.parse(b"-0.5"), Ok(Scalar::Float(-0.5)));
        assert!(matches!(
            ScalarType::Double.parse(b"1,5"),
            Err(ParseFailure::Float(_))
        ));
    }

    #[test]
    fn text_must_be_utf8() {
        assert!(matches!(
            ScalarType::Int.parse(b"\xff12"),
            Err(ParseFailure::NotText(_))
        ));
        assert_eq!(
            ScalarType::String.parse("\u{4e2d}".as_bytes()),
            Ok(Scalar::String("\u{4e2d}".to_string()))
        );
    }

    #[test]
    fn type_identifiers() {
        for ty in ScalarType::ALL {
            assert_eq!(ty.name().parse::<ScalarType>().unwrap(), ty);
            assert_eq!(ty.to_string(), ty.name());
        }
        assert_eq!("SHORT".parse::<ScalarType>().unwrap(), ScalarType::Short);
        assert!("bigdecimal".parse::<ScalarType>().is_err());
        assert_eq!(Scalar::Short(3).scalar_type(), ScalarType::Short);
    }
}
