/// Builds a [`Value`](crate::Value) literal.
///
/// Scalars, arrays, and string-keyed objects mirror their Rust syntax. Two
/// keyword forms cover the scalar kinds the serde bridge cannot produce:
/// `date <expr>` wraps a `DateTime<Utc>` as [`Value::Date`](crate::Value::Date)
/// (serializing one collapses it to a string), and `bigint <expr>` wraps
/// anything convertible into a `BigInt`. Parenthesize a keyword form when
/// nesting it inside an array or object.
///
/// ```
/// use dslfmt::dsl;
///
/// let report = dsl!({
///     "title": "Q3",
///     "rows": [1, 2, 3],
///     "total": (bigint 18_446_744_073_709_551_616u128),
/// });
/// ```
#[macro_export]
macro_rules! dsl {
    (null) => {
        $crate::Value::Null
    };
    (true) => {
        $crate::Value::Bool(true)
    };
    (false) => {
        $crate::Value::Bool(false)
    };

    // keyword forms for the format-spec-capable scalars
    (date $d:expr) => {
        $crate::Value::Date($d)
    };
    (bigint $n:expr) => {
        $crate::Value::BigInt(::core::convert::Into::into($n))
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };
    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::dsl!($elem)),+])
    };

    ({}) => {
        $crate::Value::Object($crate::DslMap::new())
    };
    ({ $($key:literal : $entry:tt),+ $(,)? }) => {{
        let mut entries = $crate::DslMap::new();
        $(
            entries.insert($key.to_string(), $crate::dsl!($entry));
        )+
        $crate::Value::Object(entries)
    }};

    // a parenthesized group is re-dispatched, so keyword forms nest
    (($($nested:tt)+)) => {
        $crate::dsl!($($nested)+)
    };

    // anything else goes through the serde bridge
    ($other:expr) => {
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{format_value, DslMap, Number, Value};
    use chrono::{TimeZone, Utc};
    use num_bigint::BigInt;

    #[test]
    fn test_dsl_scalars() {
        assert_eq!(dsl!(null), Value::Null);
        assert_eq!(dsl!(true), Value::Bool(true));
        assert_eq!(dsl!(false), Value::Bool(false));
        assert_eq!(dsl!(42), Value::Number(Number::Integer(42)));
        assert_eq!(dsl!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(dsl!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_dsl_date_and_bigint_forms() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        assert_eq!(dsl!(date dt), Value::Date(dt));
        assert_eq!(dsl!(bigint 255), Value::BigInt(BigInt::from(255)));

        // the serde fallback cannot build these kinds
        assert!(matches!(dsl!(dt), Value::String(_)));
    }

    #[test]
    fn test_dsl_collections() {
        assert_eq!(dsl!([]), Value::Array(vec![]));
        assert_eq!(dsl!({}), Value::Object(DslMap::new()));

        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let obj = dsl!({
            "name": "Alice",
            "joined": (date dt),
            "karma": (bigint 1_000_000),
        });
        match obj {
            Value::Object(map) => {
                assert_eq!(map.get("name"), Some(&Value::String("Alice".to_string())));
                assert_eq!(map.get("joined"), Some(&Value::Date(dt)));
                assert_eq!(map.get("karma"), Some(&Value::BigInt(BigInt::from(1_000_000))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_dsl_values_feed_instructions() {
        let ids = dsl!([(bigint 255), (bigint 4096)]);
        let out = format_value(&ids, "fe /tostring:X /end:\" \" /exclude-last-end:true").unwrap();
        assert_eq!(out, "FF 1000");

        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
        let out = format_value(&dsl!(date dt), "basic /tostring:\"%Y-%m-%d\"").unwrap();
        assert_eq!(out, "2024-06-01");
    }
}
