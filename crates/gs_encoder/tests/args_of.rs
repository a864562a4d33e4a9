#![allow(dead_code)]

use gs_encoder::{EncodeError, Encoder, SchemaOption};
use gs_reflect::derive::Record;
use gs_reflect::info::{TypePath, Typed};
use gs_schema::{Scalar, SchemaType};

#[derive(Record)]
struct PersonArgs {
    #[graphql("!firstName")]
    first_name: String,
    #[graphql("lastName")]
    last_name: String,
    #[graphql("age")]
    age: i32,
}

#[test]
fn args_keep_names_and_nullability() {
    let mut encoder = Encoder::new();
    let args = encoder.args_of::<PersonArgs>().unwrap();

    assert_eq!(args.len(), 3);
    assert_eq!(
        args.get("firstName").unwrap().ty,
        SchemaType::non_null(Scalar::String.into())
    );
    assert_eq!(args.get("lastName").unwrap().ty, Scalar::String.into());
    assert_eq!(args.get("age").unwrap().ty, Scalar::Int.into());
    assert_eq!(args.names().collect::<Vec<_>>(), ["firstName", "lastName", "age"]);
}

#[test]
fn args_are_not_cached_as_objects() {
    let mut encoder = Encoder::new();
    encoder.args_of::<PersonArgs>().unwrap();
    encoder.args_of::<Box<PersonArgs>>().unwrap();

    assert!(encoder.arena().is_empty());
    assert!(encoder.cache().lookup(PersonArgs::type_info()).is_none());
}

#[derive(Record)]
struct Filter {
    #[graphql("ids")]
    ids: Vec<u64>,
    #[graphql("!page")]
    page: Page,
    cursor_secret: String,
}

#[derive(Record)]
struct Page {
    #[graphql("!size")]
    size: u16,
}

#[test]
fn nested_struct_args_resolve_to_objects() {
    let mut encoder = Encoder::new();
    let args = encoder.args_of::<Filter>().unwrap();
    let page = encoder.struct_of::<Page>(&[]).unwrap();

    assert_eq!(args.len(), 2);
    assert_eq!(args.get("page").unwrap().ty, SchemaType::non_null(page.into()));
    assert_eq!(encoder.display(&args.get("ids").unwrap().ty).to_string(), "[Int]");
    assert!(!args.contains("cursor_secret"));
}

#[derive(Record)]
struct Broken {
    #[graphql("lookup")]
    lookup: std::collections::BTreeMap<String, String>,
}

#[test]
fn args_errors() {
    let mut encoder = Encoder::new();

    assert_eq!(
        encoder.args_of::<Vec<PersonArgs>>().unwrap_err(),
        EncodeError::NotStruct(<Vec<PersonArgs>>::type_path())
    );

    let err = encoder.args_of::<Broken>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Broken.lookup"), "{message}");
    assert!(message.contains("BTreeMap"), "{message}");
}

#[derive(Record)]
struct Query {
    #[graphql("person")]
    person: Person,
}

#[derive(Record)]
struct Person {
    #[graphql("!name")]
    name: String,
}

#[test]
fn field_of_wires_args_and_docs() {
    let mut encoder = Encoder::new();
    let field = encoder
        .field_of::<Person>(&[
            SchemaOption::with_args::<PersonArgs>(),
            SchemaOption::with_description("Look a person up."),
            SchemaOption::with_deprecation_reason("Use `people`."),
        ])
        .unwrap();
    let person = encoder.struct_of::<Person>(&[]).unwrap();

    assert_eq!(field.ty, SchemaType::Object(person));
    assert_eq!(field.args.len(), 3);
    assert_eq!(field.description.as_deref(), Some("Look a person up."));
    assert_eq!(field.deprecation_reason.as_deref(), Some("Use `people`."));
    assert!(!field.has_resolver());
}

#[test]
fn field_of_rejects_argument_options() {
    let mut encoder = Encoder::new();
    let err = encoder
        .field_of::<Person>(&[SchemaOption::with_default_value("x")])
        .unwrap_err();
    assert_eq!(err, EncodeError::NotSupported("Field"));
}

#[test]
fn array_of_wraps_the_item_type() {
    let mut encoder = Encoder::new();

    let people = encoder
        .array_of::<Person>(&[SchemaOption::with_description("Someone.")])
        .unwrap();
    let person = encoder.struct_of::<Person>(&[]).unwrap();
    assert_eq!(people, SchemaType::list(person.into()));
    assert_eq!(encoder.object(person).unwrap().description(), Some("Someone."));

    let names = encoder.array_of::<Option<String>>(&[]).unwrap();
    assert_eq!(encoder.display(&names).to_string(), "[String]");

    let matrix = encoder.array_of::<Vec<f32>>(&[]).unwrap();
    assert_eq!(encoder.display(&matrix).to_string(), "[[Float]]");

    let query = encoder.struct_of::<Query>(&[]).unwrap();
    let object = encoder.object(query).unwrap();
    assert_eq!(object.field("person").unwrap().ty, SchemaType::Object(person));
}
