#![allow(dead_code)]

use chrono::NaiveDate;
use object_explorer::{Map, Value};

pub fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Map(entries.into_iter().collect::<Map>())
}

pub fn list<const N: usize>(items: [Value; N]) -> Value {
    Value::List(items.into())
}

pub fn out<const N: usize>(entries: [(&str, Value); N]) -> Map {
    entries.into_iter().collect()
}

pub fn today() -> Value {
    Value::from(NaiveDate::from_ymd_opt(2020, 6, 21).unwrap())
}

/// `{ a: [], b: nil, c: 0 }`
pub fn shallow() -> Value {
    map([("a", list([])), ("b", Value::Null), ("c", Value::from(0))])
}

/// `{ d: [1, { a: today, b: [{}, { a: 0, b: nil }] }, []], e: "another" }`
pub fn with_lists() -> Value {
    map([
        (
            "d",
            list([
                Value::from(1),
                map([
                    ("a", today()),
                    (
                        "b",
                        list([map([]), map([("a", Value::from(0)), ("b", Value::Null)])]),
                    ),
                ]),
                list([]),
            ]),
        ),
        ("e", Value::from("another")),
    ])
}

/// `shallow` and `with_lists` merged, plus `f` and a nested `g`
pub fn deep() -> Value {
    let mut entries = Map::new();
    for part in [shallow(), with_lists()] {
        if let Value::Map(part) = part {
            entries.extend(part);
        }
    }
    entries.insert("f", "yet another");
    entries.insert(
        "g",
        map([(
            "a",
            map([("a", list([Value::from("last")])), ("b", today())]),
        )]),
    );
    Value::Map(entries)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
