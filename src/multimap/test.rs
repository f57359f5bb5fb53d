use crate::multimap::{Exact, IgnoreAsciiCase, MultiMap};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<MultiMap<String, Exact>>();
    is_send_sync::<MultiMap<String, IgnoreAsciiCase>>();
};

#[test]
fn multimap() {
    let mut map = MultiMap::<String>::new();

    assert!(map.is_empty());
    assert!(map.get_first("a").is_none());
    assert!(map.get_all("a").is_empty());

    map.add("a", "1");
    map.add("b", "2");
    map.add("a", "3");
    map.add("c", "4");
    map.add("a", "5");

    assert_eq!(map.len(), 3);
    assert_eq!(map.get_first("a").unwrap(), "1");
    assert_eq!(map.get_all("a"), ["1", "3", "5"]);
    assert_eq!(map.get_all("b"), ["2"]);

    // distinct keys keep their first insertion position
    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, ["a", "b", "c"]);

    let entries: Vec<_> = map.iter().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].0, "a");
    assert_eq!(entries[0].1, ["1", "3", "5"]);
    assert_eq!(entries[2].0, "c");
    assert_eq!(entries[2].1, ["4"]);
}

#[test]
fn exact_is_case_sensitive() {
    let mut map = MultiMap::<String, Exact>::new();
    map.add("Key", "upper");
    map.add("key", "lower");

    assert_eq!(map.len(), 2);
    assert_eq!(map.get_first("Key").unwrap(), "upper");
    assert_eq!(map.get_first("key").unwrap(), "lower");
    assert!(!map.contains("KEY"));
}

#[test]
fn ignore_case() {
    let mut map = MultiMap::<String, IgnoreAsciiCase>::new();
    map.add("Content-Type", "x");

    assert!(map.contains("content-type"));
    assert!(map.contains("CONTENT-TYPE"));
    assert_eq!(map.get_first("CONTENT-TYPE").unwrap(), "x");

    map.add("content-TYPE", "y");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_all("Content-Type"), ["x", "y"]);

    // first inserted casing is kept
    assert_eq!(map.keys().next(), Some("Content-Type"));
    assert_eq!(format!("{map:?}"), r#"{"Content-Type": ["x", "y"]}"#);
}

#[test]
fn lookup_ignores_unrelated_keys() {
    let mut left = MultiMap::<String>::new();
    left.add("x", "1");
    left.add("y", "2");
    left.add("target", "t");

    let mut right = MultiMap::<String>::new();
    right.add("target", "t");
    right.add("y", "2");
    right.add("x", "1");

    assert_eq!(left.get_first("target"), right.get_first("target"));
    assert_eq!(left.get_all("target"), right.get_all("target"));

    // order of distinct keys is part of the structure
    assert_ne!(left, right);
}

#[test]
fn get_all_as_skips_unconvertible() {
    let mut map = MultiMap::<String, IgnoreAsciiCase>::new();
    map.add("X-Count", "many");
    map.add("x-count", "-1");
    map.add("X-COUNT", "42");
    map.add("x-count", "7");

    // `-1` is not a valid u32, `42` is the first convertible value
    assert_eq!(map.get_all_as("x-count", 0u32), 42);
    // `-1` is a valid i64
    assert_eq!(map.get_all_as("x-count", 0i64), -1);
    assert_eq!(map.get_all_as("x-missing", 9u8), 9);

    map.add("X-Flag", "yes");
    assert!(map.get_all_as("x-flag", true));
    map.add("X-Flag", "false");
    assert!(!map.get_all_as("x-flag", true));
}

#[test]
fn collect_and_extend() {
    let mut map: MultiMap = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
    assert_eq!(map.get_all("a"), ["1", "3"]);

    map.extend([("b", "4"), ("c", "5")]);
    assert_eq!(map.get_all("b"), ["2", "4"]);
    assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);

    let cloned = map.clone();
    assert_eq!(cloned, map);

    let mut count = 0;
    for (_, values) in &map {
        count += values.len();
    }
    assert_eq!(count, 5);
}

#[test]
fn generic_values() {
    let mut map = MultiMap::<u32>::new();
    map.add("n", 1u32);
    map.add("n", 2u32);
    assert_eq!(map.get_first("n"), Some(&1));
    assert_eq!(map.get_all("n"), [1u32, 2]);
}
