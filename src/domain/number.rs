use serde_json::{Number, Value};
use std::cmp::Ordering;

/// A JSON number kept in the representation it was given in.
///
/// Integers compare exactly against integers of any size JSON can carry.
/// Comparisons involving a float are exact too: the float is never rounded
/// into the integer domain, nor the integer into the float domain.
#[derive(Debug, Clone, Copy)]
pub enum Numeric {
    Int(i64),
    UInt(u64),
    Float(f64),
}

// |f| below this bound converts to i128 without loss once integral.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

impl Numeric {
    /// Read a JSON number without changing its value.
    ///
    /// Returns `None` only for numbers `serde_json` cannot represent as
    /// `i64`, `u64` or `f64`.
    pub fn from_json(n: &Number) -> Option<Self> {
        if let Some(i) = n.as_i64() {
            Some(Numeric::Int(i))
        } else if let Some(u) = n.as_u64() {
            Some(Numeric::UInt(u))
        } else {
            n.as_f64().map(Numeric::Float)
        }
    }

    /// The JSON form of this number. Non-finite floats become `null`.
    pub fn to_json(self) -> Value {
        match self {
            Numeric::Int(i) => Value::Number(Number::from(i)),
            Numeric::UInt(u) => Value::Number(Number::from(u)),
            Numeric::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }

    fn as_i128(self) -> Option<i128> {
        match self {
            Numeric::Int(i) => Some(i128::from(i)),
            Numeric::UInt(u) => Some(i128::from(u)),
            Numeric::Float(_) => None,
        }
    }
}

/// Exact ordering of an integer against a float.
fn cmp_int_float(a: i128, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    let floor = f.floor();
    if floor >= I128_LIMIT {
        return Some(Ordering::Less);
    }
    if floor < -I128_LIMIT {
        return Some(Ordering::Greater);
    }

    let floor_int = floor as i128;
    Some(match a.cmp(&floor_int) {
        Ordering::Greater => Ordering::Greater,
        Ordering::Less => Ordering::Less,
        Ordering::Equal if f == floor => Ordering::Equal,
        Ordering::Equal => Ordering::Less,
    })
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.as_i128(), other.as_i128(), *self, *other) {
            (Some(a), Some(b), _, _) => Some(a.cmp(&b)),
            (Some(a), None, _, Numeric::Float(f)) => cmp_int_float(a, f),
            (None, Some(b), Numeric::Float(f), _) => cmp_int_float(b, f).map(Ordering::reverse),
            (_, _, Numeric::Float(x), Numeric::Float(y)) => x.partial_cmp(&y),
            _ => None,
        }
    }
}

macro_rules! numeric_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Numeric {
            fn from(n: $t) -> Self {
                Numeric::Int(i64::from(n))
            }
        }
    )*};
}

macro_rules! numeric_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Numeric {
            fn from(n: $t) -> Self {
                let n = u64::from(n);
                i64::try_from(n).map_or(Numeric::UInt(n), Numeric::Int)
            }
        }
    )*};
}

numeric_from_signed!(i8, i16, i32, i64);
numeric_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Numeric {
    fn from(n: isize) -> Self {
        Numeric::Int(n as i64)
    }
}

impl From<usize> for Numeric {
    fn from(n: usize) -> Self {
        Numeric::from(n as u64)
    }
}

impl From<f32> for Numeric {
    fn from(n: f32) -> Self {
        Numeric::Float(f64::from(n))
    }
}

impl From<f64> for Numeric {
    fn from(n: f64) -> Self {
        Numeric::Float(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TWO_POW_53: u64 = 9_007_199_254_740_992;

    fn numeric(value: Value) -> Numeric {
        match value {
            Value::Number(n) => Numeric::from_json(&n).unwrap(),
            other => panic!("not a number: {other}"),
        }
    }

    #[test]
    fn test_from_json_keeps_representation() {
        assert!(matches!(numeric(json!(-3)), Numeric::Int(-3)));
        assert!(matches!(numeric(json!(u64::MAX)), Numeric::UInt(u64::MAX)));
        assert!(matches!(numeric(json!(2.5)), Numeric::Float(f) if f == 2.5));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let a = Numeric::from(TWO_POW_53);
        let b = Numeric::from(TWO_POW_53 + 1);
        assert_ne!(a, b);
        assert!(a < b);
        assert!(Numeric::from(u64::MAX) > Numeric::from(i64::MAX));
        assert!(Numeric::from(i64::MIN) < Numeric::from(0u8));
    }

    #[test]
    fn test_integers_against_floats() {
        assert_eq!(Numeric::from(3), Numeric::from(3.0));
        assert!(Numeric::from(3) < Numeric::from(3.5));
        assert!(Numeric::from(4) > Numeric::from(3.5));
        assert!(Numeric::from(-4) < Numeric::from(-3.5));

        // 2^53 + 1 is not representable as f64; the float 2^53 is below it.
        let float = Numeric::from(TWO_POW_53 as f64);
        assert_eq!(Numeric::from(TWO_POW_53), float);
        assert!(Numeric::from(TWO_POW_53 + 1) > float);
        assert!(float < Numeric::from(TWO_POW_53 + 1));
    }

    #[test]
    fn test_non_finite_floats() {
        assert!(Numeric::from(u64::MAX) < Numeric::from(f64::INFINITY));
        assert!(Numeric::from(i64::MIN) > Numeric::from(f64::NEG_INFINITY));
        assert_eq!(Numeric::from(1).partial_cmp(&Numeric::from(f64::NAN)), None);
        assert_ne!(Numeric::from(f64::NAN), Numeric::from(f64::NAN));
        assert!(Numeric::from(1e300) > Numeric::from(u64::MAX));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Numeric::from(5).to_json(), json!(5));
        assert_eq!(Numeric::from(TWO_POW_53 + 1).to_json(), json!(TWO_POW_53 + 1));
        assert_eq!(Numeric::from(5.0).to_json(), json!(5.0));
        assert_eq!(Numeric::from(f64::NAN).to_json(), Value::Null);
    }
}
