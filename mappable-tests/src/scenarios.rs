use std::collections::HashMap;

use mappable::{array, flap, hash_map, map, option, result, vec};

#[test]
fn doubles_a_sequence() {
    assert_eq!(map(&vec(), |n: i32| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
}

#[test]
fn stringifies_an_optional() {
    let to_string = |n: i32| n.to_string();

    assert_eq!(map(&option(), to_string, Some(5)), Some("5".to_string()));
    assert_eq!(map(&option(), to_string, None), None);
}

#[test]
fn result_passes_errors_through() {
    #[derive(Debug, PartialEq)]
    struct Oops(&'static str);

    let ok: Result<i32, Oops> = Ok(7);
    let err: Result<i32, Oops> = Err(Oops("nope"));

    assert_eq!(map(&result(), |n: i32| n.to_string(), ok), Ok("7".to_string()));
    assert_eq!(
        map(&result(), |_: i32| -> String { panic!("never called on Err") }, err),
        Err(Oops("nope"))
    );
}

#[test]
fn lengths_of_a_fixed_array() {
    assert_eq!(map(&array(), |s: &str| s.len(), ["a", "bb"]), [1, 2]);
}

#[test]
fn lengths_of_first_names() {
    let beatles = HashMap::from([("Lennon", "John"), ("Starr", "Ringo")]);

    assert_eq!(
        map(&hash_map(), |(_, first): (&str, &str)| first.len(), beatles),
        HashMap::from([("Lennon", 4), ("Starr", 5)])
    );
}

#[test]
fn flap_over_string_functions() {
    fn reverse(s: &str) -> String {
        s.chars().rev().collect()
    }

    fn repeat_three(s: &str) -> String {
        s.repeat(3)
    }

    let fs: Vec<fn(&str) -> String> = vec![reverse, repeat_three];

    assert_eq!(
        flap(&vec(), fs, "Hello Generics!"),
        vec![
            "!scireneG olleH".to_string(),
            "Hello Generics!Hello Generics!Hello Generics!".to_string(),
        ]
    );
}

#[test]
fn one_record_many_call_sites() {
    let seq = vec();
    let mut lengths = seq.map_with(|s: &str| s.len());

    assert_eq!(seq.map(|s: &str| s.len(), vec!["abc"]), vec![3]);
    assert_eq!(lengths(vec!["a", "bb"]), vec![1, 2]);
    assert_eq!(lengths(vec!["ccc"]), vec![3]);
}

#[test]
fn input_is_left_untouched() {
    let original = vec![1, 2, 3];
    let borrowed: Vec<&i32> = original.iter().collect();

    let doubled = map(&vec(), |n: &i32| n * 2, borrowed);

    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(original, vec![1, 2, 3]);
}
