use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toon_codec::{
    from_str, from_str_with_options, to_string, to_string_with_options, to_value, DecodeOptions,
    Delimiter, EncodeOptions, Number, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let toon = to_string(original).unwrap();
    let deserialized: T = from_str(&toon).unwrap();
    assert_eq!(*original, deserialized, "serialized form was {toon:?}");
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let toon = to_string(&user).unwrap();
    assert_eq!(
        toon,
        "id: 123\nname: Alice\nactive: true\ntags[2]: admin,developer"
    );
    let back: User = from_str(&toon).unwrap();
    assert_eq!(user, back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    };

    let toon = to_string(&order).unwrap();
    // Uniform item structs collapse into a table.
    assert!(toon.contains("items[2]{sku,price,quantity}:"));
    let back: Order = from_str(&toon).unwrap();
    assert_eq!(order, back);
}

#[test]
fn test_array_of_objects_is_tabular() {
    let products = vec![
        Product {
            sku: "A001".to_string(),
            price: 10.99,
            quantity: 5,
        },
        Product {
            sku: "B002".to_string(),
            price: 15.99,
            quantity: 3,
        },
    ];

    let toon = to_string(&products).unwrap();
    assert_eq!(
        toon,
        "[2]{sku,price,quantity}:\n  A001,10.99,5\n  B002,15.99,3"
    );
    let back: Vec<Product> = from_str(&toon).unwrap();
    assert_eq!(products, back);
}

#[test]
fn test_primitives() {
    assert_roundtrip(&42i32);
    assert_roundtrip(&3.5f64);
    assert_roundtrip(&true);
    assert_roundtrip(&false);
    assert_roundtrip(&"hello world".to_string());
    assert_roundtrip(&vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_delimiter_options() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        let toon = to_string_with_options(&user, options).unwrap();
        let back: User = from_str(&toon).unwrap();
        assert_eq!(user, back, "delimiter {delimiter:?}, text {toon:?}");
    }
}

#[test]
fn test_to_value() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string()],
    };

    let value = to_value(&user).unwrap();
    let obj = value.as_object().expect("expected object");
    assert_eq!(obj.get("id"), Some(&Value::Number(Number::Integer(123))));
    assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(obj.get("active"), Some(&Value::Bool(true)));
    let tags = obj.get("tags").and_then(Value::as_array).unwrap();
    assert_eq!(tags, &vec![Value::String("admin".to_string())]);
}

#[test]
fn test_empty_collections() {
    let empty_vec: Vec<i32> = vec![];
    assert_roundtrip(&empty_vec);

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Empty {}

    assert_roundtrip(&Empty {});
}

#[test]
fn test_option_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Settings {
        alias: Option<String>,
        retries: Option<u32>,
    }

    assert_roundtrip(&Settings {
        alias: Some("primary".to_string()),
        retries: None,
    });

    let toon = to_string(&Settings {
        alias: None,
        retries: Some(3),
    })
    .unwrap();
    assert_eq!(toon, "alias: null\nretries: 3");
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Shape {
        Point,
        Circle { radius: f64 },
        Line(f64, f64),
        Label(String),
    }

    assert_eq!(to_string(&Shape::Point).unwrap(), "Point");
    assert_roundtrip(&Shape::Point);

    assert_eq!(
        to_string(&Shape::Circle { radius: 2.5 }).unwrap(),
        "Circle:\n  radius: 2.5"
    );
    assert_roundtrip(&Shape::Circle { radius: 2.5 });

    assert_eq!(to_string(&Shape::Line(1.5, 2.5)).unwrap(), "Line[2]: 1.5,2.5");
    assert_roundtrip(&Shape::Line(1.5, 2.5));

    assert_roundtrip(&Shape::Label("axis".to_string()));

    assert_roundtrip(&vec![
        Shape::Point,
        Shape::Circle { radius: 1.5 },
        Shape::Label("mixed".to_string()),
    ]);
}

#[test]
fn test_maps() {
    let mut map = HashMap::new();
    map.insert("one".to_string(), 1u32);
    map.insert("two".to_string(), 2u32);
    assert_roundtrip(&map);
}

#[test]
fn test_tuples() {
    assert_roundtrip(&(1i32, true));
    assert_roundtrip(&(1i32, "two".to_string(), 3.5f64));
}

#[test]
fn test_special_strings() {
    let special_strings = vec![
        "".to_string(),
        "hello, world".to_string(),
        "line1\nline2".to_string(),
        "tab\there".to_string(),
        "pipe|here".to_string(),
        " leading space".to_string(),
        "trailing space ".to_string(),
        "true".to_string(),
        "false".to_string(),
        "null".to_string(),
        "123".to_string(),
        "3.5".to_string(),
        "05".to_string(),
        "-starts-with-dash".to_string(),
        "\"quoted\"".to_string(),
        "back\\slash".to_string(),
        "колонка: value".to_string(),
    ];

    for s in special_strings {
        assert_roundtrip(&s);
    }
}

#[test]
fn test_numbers() {
    assert_roundtrip(&0i8);
    assert_roundtrip(&127i8);
    assert_roundtrip(&-128i8);
    assert_roundtrip(&32767i16);
    assert_roundtrip(&-32768i16);
    assert_roundtrip(&2147483647i32);
    assert_roundtrip(&-2147483648i32);
    assert_roundtrip(&9223372036854775807i64);
    assert_roundtrip(&-9223372036854775808i64);

    assert_roundtrip(&255u8);
    assert_roundtrip(&65535u16);
    assert_roundtrip(&4294967295u32);
    // Beyond i64: stored as a big integer, still exact.
    assert_roundtrip(&18446744073709551615u64);

    assert_roundtrip(&0.0f32);
    assert_roundtrip(&3.5f32);
    assert_roundtrip(&-2.5f32);
    assert_roundtrip(&0.0f64);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&-5.75f64);
    assert_roundtrip(&1.0e21f64);
}

#[test]
fn test_lenient_options_via_serde() {
    let options = DecodeOptions::new().with_strict(false);
    let nums: Vec<i32> = from_str_with_options("[5]: 1,2,3", options).unwrap();
    assert_eq!(nums, vec![1, 2, 3]);
}

#[test]
fn test_serde_json_interop() {
    let json = serde_json::json!({
        "name": "Alice",
        "age": 30,
        "tags": ["a", "b"]
    });
    let value = to_value(&json).unwrap();
    let toon = to_string(&value).unwrap();
    let back: serde_json::Value = from_str(&toon).unwrap();
    assert_eq!(json, back);
}

#[test]
fn test_char_and_byte_vec() {
    assert_roundtrip(&'x');

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Blob {
        data: Vec<u8>,
    }

    let blob = Blob {
        data: vec![0, 127, 255],
    };
    assert_eq!(to_string(&blob).unwrap(), "data[3]: 0,127,255");
    assert_roundtrip(&blob);
}
