#![allow(dead_code)]

use std::sync::Arc;

use gs_encoder::{CacheKeyPolicy, EncodeError, Encoder, SchemaOption};
use gs_reflect::derive::Record;
use gs_reflect::info::TypeHandle;
use gs_schema::{Scalar, SchemaType};

fn render(encoder: &Encoder, ty: &SchemaType) -> String {
    encoder.display(ty).to_string()
}

#[derive(Record)]
struct StructExample {
    #[graphql("field1")]
    field1: String,
    field2: i32,
    #[graphql("field3")]
    field3: bool,
}

#[test]
fn untagged_fields_are_ignored() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<StructExample>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    assert_eq!(object.name(), "StructExample");
    assert_eq!(object.fields().len(), 2);
    assert_eq!(object.fields().names().collect::<Vec<_>>(), ["field1", "field3"]);

    let field1 = object.field("field1").unwrap();
    assert_eq!(field1.name, "field1");
    assert_eq!(render(&encoder, &field1.ty), "String");
    assert_eq!(render(&encoder, &object.field("field3").unwrap().ty), "Boolean");
    assert!(object.field("field2").is_none());
}

#[derive(Record)]
struct Scalars {
    #[graphql("int8")]
    int8: Option<i8>,
    #[graphql("!int8NonNull")]
    int8_non_null: i8,
    #[graphql("uint")]
    uint: Box<usize>,
    #[graphql("!float32")]
    float32: f32,
    #[graphql("!float64")]
    float64: f64,
    #[graphql("string")]
    string: Option<String>,
    #[graphql("!boolean")]
    boolean: bool,
}

#[test]
fn primitives_map_to_scalars() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<Scalars>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    let expected = [
        ("int8", "Int"),
        ("int8NonNull", "Int!"),
        ("uint", "Int"),
        ("float32", "Float!"),
        ("float64", "Float!"),
        ("string", "String"),
        ("boolean", "Boolean!"),
    ];
    for (name, ty) in expected {
        assert_eq!(render(&encoder, &object.field(name).unwrap().ty), ty, "{name}");
    }
}

#[cfg(feature = "chrono")]
#[derive(Record)]
struct Timestamps {
    #[graphql("createdAt")]
    created_at: chrono::DateTime<chrono::Utc>,
    #[graphql("!updatedAt")]
    updated_at: Option<chrono::DateTime<chrono::Utc>>,
    #[graphql("localAt")]
    local_at: chrono::NaiveDateTime,
    #[graphql("at")]
    at: std::time::SystemTime,
}

#[cfg(feature = "chrono")]
#[test]
fn date_times_map_to_date_time() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<Timestamps>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    assert_eq!(object.field("createdAt").unwrap().ty, Scalar::DateTime.into());
    assert_eq!(render(&encoder, &object.field("updatedAt").unwrap().ty), "DateTime!");
    assert_eq!(object.field("localAt").unwrap().ty, Scalar::DateTime.into());
    assert_eq!(object.field("at").unwrap().ty, Scalar::DateTime.into());
}

#[derive(Record)]
struct Author {
    #[graphql("!name")]
    name: String,
}

#[derive(Record)]
struct Book {
    #[graphql("author")]
    author: Author,
    #[graphql("coAuthors")]
    co_authors: Vec<Author>,
    #[graphql("!editor")]
    editor: Arc<Author>,
    #[graphql("tags")]
    tags: Vec<String>,
}

#[test]
fn nested_structs_share_one_object() {
    let mut encoder = Encoder::new();
    let book = encoder.struct_of::<Book>(&[]).unwrap();
    let author = encoder.struct_of::<Author>(&[]).unwrap();
    let object = encoder.object(book).unwrap();

    assert_eq!(object.field("author").unwrap().ty, SchemaType::Object(author));
    assert_eq!(
        object.field("coAuthors").unwrap().ty,
        SchemaType::list(SchemaType::Object(author))
    );
    assert_eq!(
        object.field("editor").unwrap().ty,
        SchemaType::non_null(SchemaType::Object(author))
    );
    assert_eq!(render(&encoder, &object.field("tags").unwrap().ty), "[String]");
    assert_eq!(encoder.arena().len(), 2);
}

#[test]
fn building_twice_returns_the_same_object() {
    let mut encoder = Encoder::new();
    let first = encoder.struct_of::<Book>(&[]).unwrap();
    let second = encoder.struct_of::<Box<Book>>(&[]).unwrap();

    assert_eq!(first, second);
    assert_eq!(encoder.arena().len(), 2);
}

#[derive(Record)]
struct Shelf {
    #[graphql("!tags")]
    tags: Vec<String>,
    #[graphql("labels")]
    labels: Vec<String>,
    #[graphql("!authors")]
    authors: Vec<Author>,
    #[graphql("coAuthors")]
    co_authors: Option<Vec<Box<Author>>>,
    #[graphql("!grid")]
    grid: [[u8; 2]; 2],
}

#[test]
fn non_null_wraps_the_whole_list() {
    let mut encoder = Encoder::new();
    let shelf = encoder.struct_of::<Shelf>(&[]).unwrap();
    let author = encoder.struct_of::<Author>(&[]).unwrap();
    let object = encoder.object(shelf).unwrap();

    let render_field = |name: &str| render(&encoder, &object.field(name).unwrap().ty);
    assert_eq!(render_field("tags"), "[String]!");
    assert_eq!(render_field("labels"), "[String]");
    assert_eq!(render_field("authors"), "[Author]!");
    assert_eq!(render_field("coAuthors"), "[Author]");
    assert_eq!(render_field("grid"), "[[Int]]!");

    assert_eq!(
        object.field("authors").unwrap().ty,
        SchemaType::non_null(SchemaType::list(SchemaType::Object(author)))
    );
}

#[derive(Record)]
struct Page<T> {
    #[graphql("!items")]
    items: Vec<T>,
    #[graphql("total")]
    total: u32,
}

#[test]
fn generic_records_get_plain_names() {
    let mut encoder = Encoder::new();
    let authors = encoder.struct_of::<Page<Author>>(&[]).unwrap();
    let books = encoder.struct_of::<Page<Book>>(&[]).unwrap();

    assert_ne!(authors, books);
    assert_eq!(encoder.object(authors).unwrap().name(), "PageAuthor");
    assert_eq!(encoder.object(books).unwrap().name(), "PageBook");

    let items = &encoder.object(authors).unwrap().field("items").unwrap().ty;
    assert_eq!(render(&encoder, items), "[Author]!");
}

#[derive(Record)]
struct Employee {
    #[graphql("!name")]
    name: String,
    #[graphql("manager")]
    manager: Option<Box<Employee>>,
    #[graphql("team")]
    team: Option<Team>,
}

#[derive(Record)]
struct Team {
    #[graphql("members")]
    members: Vec<Employee>,
    #[graphql("lead")]
    lead: Box<Employee>,
}

#[test]
fn cycles_through_other_types_terminate() {
    let mut encoder = Encoder::new();
    let employee = encoder.struct_of::<Employee>(&[]).unwrap();
    let team = encoder.struct_of::<Team>(&[]).unwrap();

    let object = encoder.object(employee).unwrap();
    assert_eq!(object.field("manager").unwrap().ty, SchemaType::Object(employee));
    assert_eq!(object.field("team").unwrap().ty, SchemaType::Object(team));

    let object = encoder.object(team).unwrap();
    assert_eq!(render(&encoder, &object.field("members").unwrap().ty), "[Employee]");
    assert_eq!(object.field("lead").unwrap().ty, SchemaType::Object(employee));
    assert_eq!(encoder.arena().len(), 2);
}

#[derive(Record)]
struct Blank {
    #[graphql("")]
    blank: u8,
    #[graphql("!")]
    required_blank: u8,
}

#[test]
fn empty_names_are_kept() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<Blank>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    // Both fields are exposed as "", the second replaces the first.
    assert_eq!(object.fields().len(), 1);
    assert_eq!(render(&encoder, &object.field("").unwrap().ty), "Int!");
}

#[derive(Record)]
struct Payload {
    #[graphql("id")]
    id: u64,
    #[graphql("data")]
    data: Box<dyn std::any::Any + Send + Sync>,
}

#[derive(Record)]
struct Envelope {
    #[graphql("payload")]
    payload: Payload,
}

#[test]
fn unrecognized_field_names_struct_and_field() {
    let mut encoder = Encoder::new();
    let err = encoder.struct_of::<Payload>(&[]).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("not recognized"), "{message}");
    assert!(message.contains("dyn core::any::Any"), "{message}");
    assert!(message.contains("Payload"), "{message}");
    assert!(message.contains("data"), "{message}");
}

#[test]
fn nested_failures_keep_the_innermost_context() {
    let mut encoder = Encoder::new();
    let err = encoder.struct_of::<Envelope>(&[]).unwrap_err();

    match err {
        EncodeError::TypeNotRecognizedInStruct { struct_path, field, .. } => {
            assert!(struct_path.ends_with("::Payload"));
            assert_eq!(field, "data");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_builds_keep_failing() {
    let mut encoder = Encoder::new();
    let first = encoder.struct_of::<Payload>(&[]).unwrap_err();
    let second = encoder.struct_of::<Payload>(&[]).unwrap_err();
    assert_eq!(first, second);

    let boxed = encoder
        .resolve_type(&TypeHandle::of::<Box<Payload>>())
        .unwrap_err();
    assert_eq!(boxed, first);
    assert_eq!(encoder.array_of::<Payload>(&[]).unwrap_err(), first);

    // Containing structs fail with the same context.
    assert_eq!(encoder.struct_of::<Envelope>(&[]).unwrap_err(), first);

    // Types resolved on the way are still usable.
    assert_eq!(
        encoder.resolve_type(&TypeHandle::of::<u64>()),
        Ok(Scalar::Int.into())
    );
    assert!(encoder.struct_of::<Author>(&[]).is_ok());
}

#[derive(Record)]
struct Invoice {
    #[graphql("lines")]
    lines: Vec<Line>,
    #[graphql("attachment")]
    attachment: Box<dyn std::any::Any + Send + Sync>,
}

#[derive(Record)]
struct Line {
    #[graphql("!invoice")]
    invoice: Box<Invoice>,
}

#[test]
fn objects_finished_inside_a_failed_build_fail_too() {
    let mut encoder = Encoder::new();
    let err = encoder.struct_of::<Invoice>(&[]).unwrap_err();
    assert!(matches!(
        err,
        EncodeError::TypeNotRecognizedInStruct { field: "attachment", .. }
    ));

    // `Line` was completed while `Invoice` was still being built.
    assert_eq!(encoder.struct_of::<Line>(&[]).unwrap_err(), err);
    assert_eq!(
        encoder.resolve_type(&TypeHandle::of::<Vec<Line>>()).unwrap_err(),
        err
    );
}

#[test]
fn object_options_apply_on_first_build() {
    let mut encoder = Encoder::new();
    let id = encoder
        .struct_of::<Author>(&[SchemaOption::with_description("A person who writes.")])
        .unwrap();
    let again = encoder
        .struct_of::<Author>(&[SchemaOption::with_description("ignored")])
        .unwrap();

    assert_eq!(id, again);
    assert_eq!(encoder.object(id).unwrap().description(), Some("A person who writes."));
}

#[test]
fn object_rejects_field_options() {
    let mut encoder = Encoder::new();
    let err = encoder
        .struct_of::<Author>(&[SchemaOption::with_deprecation_reason("old")])
        .unwrap_err();

    assert_eq!(err, EncodeError::NotSupported("Object"));
    assert!(encoder.arena().is_empty());
}

mod v1 {
    use gs_reflect::derive::Record;

    #[derive(Record)]
    pub struct Profile {
        #[graphql("name")]
        pub name: String,
    }
}

mod v2 {
    use gs_reflect::derive::Record;

    #[derive(Record)]
    pub struct Profile {
        #[graphql("!name")]
        pub name: String,
        #[graphql("age")]
        pub age: u8,
    }
}

#[test]
fn qualified_keys_keep_same_named_types_apart() {
    let mut encoder = Encoder::new();
    let first = encoder.struct_of::<v1::Profile>(&[]).unwrap();
    let second = encoder.struct_of::<v2::Profile>(&[]).unwrap();

    assert_ne!(first, second);
    assert_eq!(encoder.object(second).unwrap().fields().len(), 2);
}

#[test]
fn bare_name_keys_alias_same_named_types() {
    let mut encoder = Encoder::with_key_policy(CacheKeyPolicy::BareName);
    let first = encoder.struct_of::<v1::Profile>(&[]).unwrap();
    let second = encoder.struct_of::<v2::Profile>(&[]).unwrap();

    assert_eq!(first, second);
    assert_eq!(encoder.object(second).unwrap().fields().len(), 1);
}
