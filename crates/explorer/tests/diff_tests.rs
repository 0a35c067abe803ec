mod common;

use common::*;
use object_explorer::{DiffOptions, Explorer, Key, Map, Path, Step, Value};
use pretty_assertions::assert_eq;

fn diff(tree: &Value, other: &Value, options: DiffOptions<'_>) -> Map {
    Explorer::new(tree).unwrap().diff(other, options).unwrap()
}

/// `deep()` with `b` replaced by a copy of `d`, and `d` removed
fn altered_deep() -> Value {
    let mut altered = deep();
    if let Value::Map(entries) = &mut altered {
        let d = entries.remove(&"d".into()).unwrap();
        entries.insert("b", d);
    }
    altered
}

fn deep_d() -> Value {
    deep().as_map().unwrap().get(&"d".into()).unwrap().clone()
}

#[test]
fn test_diff_of_equal_copy_is_empty() {
    for tree in [map([]), shallow(), with_lists(), deep()] {
        let copy = tree.clone();
        assert_eq!(diff(&tree, &copy, DiffOptions::default()), Map::new());
    }
}

#[test]
fn test_diff_with_itself_is_empty() {
    let tree = deep();
    assert_eq!(diff(&tree, &tree, DiffOptions::default()), Map::new());
}

#[test]
fn test_changed_list_element_reports_whole_list() {
    let a = map([("x", Value::from(1)), ("y", list([Value::from(1), Value::from(2)]))]);
    let b = map([("x", Value::from(1)), ("y", list([Value::from(9), Value::from(2)]))]);

    // y[0] is selected first, then y itself replaces it
    let output = diff(&a, &b, DiffOptions::default());
    assert_eq!(output, out([("y", list([Value::from(1), Value::from(2)]))]));

    let in_place = diff(&a, &b, DiffOptions::default().preserve_array_indexes(true));
    assert_eq!(in_place, out([("y", list([Value::from(1), Value::from(2)]))]));
}

#[test]
fn test_diff_from_another_object() {
    let tree = deep();
    let altered = altered_deep();

    assert_eq!(
        diff(&tree, &altered, DiffOptions::default()),
        out([("b", Value::Null), ("d", deep_d())])
    );
}

#[test]
fn test_customized_diff_output() {
    let tree = deep();
    let altered = altered_deep();

    let output = diff(
        &tree,
        &altered,
        DiffOptions::default().report(|node, path, _root| {
            let altered_node = if path.is_root() {
                Value::no_value()
            } else {
                altered.get_path(path).cloned().unwrap_or_default()
            };
            Ok(map([
                ("node", node.clone()),
                ("altered_node", altered_node),
                ("some_other_value", Value::from("default")),
            ]))
        }),
    );

    assert_eq!(
        output,
        out([
            (
                "b",
                map([
                    ("node", Value::Null),
                    ("altered_node", deep_d()),
                    ("some_other_value", Value::from("default")),
                ]),
            ),
            (
                "d",
                map([
                    ("node", deep_d()),
                    ("altered_node", Value::Null),
                    ("some_other_value", Value::from("default")),
                ]),
            ),
        ])
    );
}

#[test]
fn test_missing_path_counts_as_different() {
    // A null in `tree` differs from an absent key in `other`
    let tree = map([("gone", Value::Null), ("kept", Value::from(1))]);
    let other = map([("kept", Value::from(1))]);

    assert_eq!(
        diff(&tree, &other, DiffOptions::default()),
        out([("gone", Value::Null)])
    );
}

#[test]
fn test_diff_only_reports_explored_tree() {
    // Keys only present in `other` are not visited
    let tree = map([("a", Value::from(1))]);
    let other = map([("a", Value::from(1)), ("extra", Value::from(2))]);

    assert_eq!(diff(&tree, &other, DiffOptions::default()), Map::new());
}

#[test]
fn test_diff_scalar_against_container() {
    let tree = map([("a", map([("b", Value::from(1))]))]);
    let other = map([("a", Value::from("flat"))]);

    assert_eq!(
        diff(&tree, &other, DiffOptions::default()),
        out([("a", map([("b", Value::from(1))]))])
    );
}

#[test]
fn test_diff_nested_leaf_selects_enclosing_containers() {
    let tree = map([(
        "a",
        map([("b", list([Value::from(1), Value::from(2), Value::from(3)]))]),
    )]);
    let other = map([(
        "a",
        map([("b", list([Value::from(1), Value::from(2), Value::from(4)]))]),
    )]);

    // The leaf differs, and so do `b` and `a` which contain it; `a` is reported last
    let output = diff(&tree, &other, DiffOptions::default());
    let a = tree.get_path(&[Step::from("a")]).unwrap().clone();
    assert_eq!(output, out([("a", a)]));
}

#[test]
fn test_diff_with_preserved_indexes() {
    let tree = map([(
        "l",
        list([
            map([("k", Value::from(1))]),
            map([("k", Value::from(2))]),
            map([("k", Value::from(3))]),
        ]),
    )]);
    let other = map([(
        "l",
        list([
            map([("k", Value::from(1))]),
            map([("k", Value::from(2))]),
            map([("k", Value::from(30))]),
        ]),
    )]);
    let summarize = |node: &Value, _: &Path, _: &Value| {
        Ok(match node {
            Value::List(items) => Value::from(format!("{} items", items.len())),
            node => node.clone(),
        })
    };

    // l[2].k, l[2] and l all differ; the list is reported last
    let output = diff(
        &tree,
        &other,
        DiffOptions::default()
            .preserve_array_indexes(true)
            .report(summarize),
    );
    assert_eq!(output, out([("l", Value::from("3 items"))]));
}

#[test]
fn test_diff_of_wide_map() {
    let tree = Value::Map((0..40_000i64).map(|i| (Key::Integer(i), i)).collect());
    let mut other = tree.clone();
    if let Value::Map(entries) = &mut other {
        entries.insert(Key::Integer(20_000), "changed");
    }

    assert_eq!(
        diff(&tree, &other, DiffOptions::default()),
        [(Key::Integer(20_000), Value::from(20_000))].into_iter().collect::<Map>()
    );
}
