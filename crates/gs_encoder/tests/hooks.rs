#![allow(dead_code)]

use gs_encoder::hooks::{ResolverProvider, TypeProvider, TypeTraitResolver, TypeTraitTypeProvider};
use gs_encoder::{EncodeError, Encoder};
use gs_reflect::derive::Record;
use gs_reflect::impl_opaque_record;
use gs_reflect::info::TypeHandle;
use gs_schema::{ResolveError, ResolveParams, Scalar, SchemaType, Value};

fn call(field: &gs_schema::Field, name: &str) -> Result<Value, ResolveError> {
    let source = Value::Null;
    let args = serde_json::Map::new();
    let resolve = field.resolve.as_ref().expect("field has a resolver");
    resolve(ResolveParams {
        source: &source,
        args: &args,
        field_name: name,
    })
}

/// A struct that would otherwise become an object.
#[derive(Record)]
#[record(TypeProvider)]
struct CustomFieldType {
    #[graphql("value")]
    value: String,
}

impl TypeProvider for CustomFieldType {
    fn schema_type() -> SchemaType {
        Scalar::Float.into()
    }
}

#[derive(Record)]
#[record(TypeProvider, ResolverProvider)]
struct CustomFieldTypeWithResolver {
    value: String,
}

impl TypeProvider for CustomFieldTypeWithResolver {
    fn schema_type() -> SchemaType {
        Scalar::Float.into()
    }
}

impl ResolverProvider for CustomFieldTypeWithResolver {
    fn resolve(_: ResolveParams<'_>) -> Result<Value, ResolveError> {
        Err(ResolveError::new("only to catch"))
    }
}

#[derive(Record)]
#[record(ResolverProvider)]
struct Counter {
    #[graphql("!count")]
    count: u32,
}

impl ResolverProvider for Counter {
    fn resolve(params: ResolveParams<'_>) -> Result<Value, ResolveError> {
        Ok(Value::from(params.field_name.len()))
    }
}

#[derive(Record)]
struct ModelComplete {
    #[graphql("id")]
    id: CustomFieldType,
    #[graphql("idPtr")]
    id_ptr: Option<Box<CustomFieldType>>,
    #[graphql("!idNonNull")]
    id_non_null: CustomFieldType,
    #[graphql("withResolver")]
    with_resolver: CustomFieldTypeWithResolver,
    #[graphql("counter")]
    counter: Counter,
    #[graphql("counters")]
    counters: Vec<Counter>,
    #[graphql("name")]
    name: String,
    #[graphql("namePtr")]
    name_ptr: Option<String>,
}

#[test]
fn type_provider_overrides_structure() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<ModelComplete>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    assert_eq!(object.field("id").unwrap().ty, Scalar::Float.into());
    assert_eq!(object.field("idPtr").unwrap().ty, Scalar::Float.into());
    assert_eq!(
        object.field("idNonNull").unwrap().ty,
        SchemaType::non_null(Scalar::Float.into())
    );
    assert!(encoder.arena().find("CustomFieldType").is_none());
}

#[test]
fn resolver_provider_keeps_structural_type() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<ModelComplete>(&[]).unwrap();
    let counter = encoder.struct_of::<Counter>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    let field = object.field("counter").unwrap();
    assert_eq!(field.ty, SchemaType::Object(counter));
    assert_eq!(call(field, "counter"), Ok(Value::from(7_usize)));

    // The resolver of a list field comes from the list type, not the item.
    let field = object.field("counters").unwrap();
    assert_eq!(field.ty, SchemaType::list(SchemaType::Object(counter)));
    assert!(!field.has_resolver());
}

#[test]
fn both_hooks_apply_together() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<ModelComplete>(&[]).unwrap();
    let field = encoder.object(id).unwrap().field("withResolver").unwrap();

    assert_eq!(field.ty, Scalar::Float.into());
    assert_eq!(call(field, "withResolver"), Err(ResolveError::new("only to catch")));
}

#[test]
fn pointers_resolve_like_their_pointee() {
    let mut encoder = Encoder::new();

    let plain = encoder.resolve_type(&TypeHandle::of::<Counter>()).unwrap();
    let boxed = encoder.resolve_type(&TypeHandle::of::<Box<Counter>>()).unwrap();
    let optional = encoder
        .resolve_type(&TypeHandle::of::<Option<std::rc::Rc<Counter>>>())
        .unwrap();
    assert_eq!(plain, boxed);
    assert_eq!(plain, optional);

    let name = encoder.resolve_type(&TypeHandle::of::<&'static str>()).unwrap();
    assert_eq!(name, Scalar::String.into());
}

struct Uuid(u128);
impl_opaque_record!(Uuid);

impl TypeProvider for Uuid {
    fn schema_type() -> SchemaType {
        Scalar::Id.into()
    }
}

#[derive(Record)]
struct Order {
    #[graphql("!id")]
    id: Uuid,
}

#[test]
fn foreign_hooks_go_through_the_registry() {
    let mut encoder = Encoder::new();
    let err = encoder.struct_of::<Order>(&[]).unwrap_err();
    assert!(matches!(&err, EncodeError::TypeNotRecognizedInStruct { field: "id", .. }));

    // The first encoder remembers `Order` as failed.
    assert_eq!(encoder.struct_of::<Order>(&[]).unwrap_err(), err);

    let mut encoder = Encoder::new();
    encoder
        .registry_mut()
        .register_type_trait::<Uuid, TypeTraitTypeProvider>();
    let id = encoder.struct_of::<Order>(&[]).unwrap();

    let ty = &encoder.object(id).unwrap().field("id").unwrap().ty;
    assert_eq!(encoder.display(ty).to_string(), "ID!");
}

#[test]
fn registry_records_hooks_of_met_types() {
    let mut encoder = Encoder::new();
    encoder.struct_of::<ModelComplete>(&[]).unwrap();

    let registry = encoder.registry();
    assert_eq!(registry.iter_with_trait::<TypeTraitTypeProvider>().count(), 2);
    assert_eq!(registry.iter_with_trait::<TypeTraitResolver>().count(), 2);
}

#[derive(Record)]
#[record(TypeProvider)]
struct Sku {
    code: String,
}

impl TypeProvider for Sku {
    fn schema_type() -> SchemaType {
        SchemaType::non_null(Scalar::Id.into())
    }
}

#[derive(Record)]
struct Product {
    #[graphql("sku")]
    sku: Sku,
    #[graphql("!requiredSku")]
    required_sku: Sku,
}

#[test]
fn bang_on_a_non_null_hook_type_does_not_stack() {
    let mut encoder = Encoder::new();
    let id = encoder.struct_of::<Product>(&[]).unwrap();
    let object = encoder.object(id).unwrap();

    let sku = &object.field("sku").unwrap().ty;
    let required = &object.field("requiredSku").unwrap().ty;
    assert_eq!(sku, required);
    assert_eq!(encoder.display(required).to_string(), "ID!");
}
