//! Property tests for the key-encoding / equality contract
//!
//! For every pair of hashable values, the canonical encodings are equal
//! exactly when `equal` holds. NaN is excluded: it never equals itself but
//! has a single encoding.

use dynval_runtime::{Value, encode_key, equal, make_map, map_get, map_set};
use proptest::prelude::*;

/// Leaves drawn from small domains so that cross-kind collisions
/// (`true`, `1`, `1.0`) actually occur.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        (-3i64..=3).prop_map(Value::Int),
        prop_oneof![
            Just(0.0),
            Just(-0.0),
            Just(1.0),
            Just(-2.0),
            Just(0.5),
            Just(9_223_372_036_854_775_808.0),
            Just(f64::INFINITY),
        ]
        .prop_map(Value::Float),
        any::<i64>().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("NaN has no equal", |f| !f.is_nan())
            .prop_map(Value::Float),
        "[ab]{0,2}".prop_map(Value::from),
    ]
}

fn hashable_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 3, |inner| {
        prop::collection::vec(inner, 0..3).prop_map(Value::tuple)
    })
}

proptest! {
    #[test]
    fn encoding_matches_equality(a in hashable_strategy(), b in hashable_strategy()) {
        let same_key = encode_key(&a).unwrap() == encode_key(&b).unwrap();
        prop_assert_eq!(same_key, equal(&a, &b), "a = {:?}, b = {:?}", a, b);
    }

    #[test]
    fn encoding_is_reflexive(a in hashable_strategy()) {
        prop_assert!(equal(&a, &a));
        prop_assert_eq!(encode_key(&a).unwrap(), encode_key(&a.clone()).unwrap());
    }

    #[test]
    fn integral_floats_find_int_keys(n in -(1i64 << 53)..(1i64 << 53)) {
        let m = make_map(vec![]).unwrap();
        map_set(&m, Value::Int(n), Value::Bool(true)).unwrap();
        let found = map_get(&m, &Value::Float(n as f64)).unwrap();
        prop_assert!(matches!(found, Value::Bool(true)));
    }
}

#[test]
fn test_nan_is_the_documented_exception() {
    let nan = Value::Float(f64::NAN);
    assert!(!equal(&nan, &nan));
    assert_eq!(
        encode_key(&nan).unwrap(),
        encode_key(&Value::Float(-f64::NAN)).unwrap()
    );
}
