use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::derive::Object;
use crate::mapper::ObjectMapper;
use crate::registry::MetadataRegistry;
use crate::mapper::RuleKind;
use crate::validate::RuleViolation;
use crate::value::{ArrayObject, ObjectRef, RawMap, Value, ValueKind};
use crate::{Assemble, AssembleConfig, AssembleError, Assembler, FieldError, MappingError, raw_map};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

// -----------------------------------------------------------------------------
// Cast table through a full type

#[derive(Object, Default, Debug)]
struct Fixture {
    int1: i64,
    int2: i64,
    int3: i64,
    int4: i64,
    string1: Option<String>,
    string2: Option<String>,
    double1: f64,
    double2: f64,
    float1: f64,
    float2: f32,
    bool1: bool,
    bool2: bool,
    bool3: bool,
    bool4: bool,
    array1: Vec<Value>,
    array2: Vec<Value>,
    datetime1: Option<NaiveDateTime>,
    datetime2: Option<NaiveDateTime>,
    container1: Option<ArrayObject>,
    container2: Option<ArrayObject>,
    container3: Option<ArrayObject>,
    instance1: Option<Arc<Fixture>>,
}

impl Assemble for Fixture {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["int1", "int2", "int3"]).as_integer()
            .select(["int4"]).as_integer()
            .select(["string1", "string2"]).as_string()
            .select(["double1", "double2"]).as_double()
            .select(["float1", "float2"]).as_float()
            .select(["bool1", "bool2", "bool3", "bool4"]).as_boolean()
            .select(["array1", "array2"]).as_array()
            .select(["datetime1", "datetime2"]).as_temporal()
            .select(["container1", "container2", "container3"]).as_container()
            .select(["instance1"]).as_instance::<Fixture>();
        Ok(())
    }
}

#[derive(Object, Default)]
struct Stranger {
    name: String,
}

#[test]
fn assemble_integer() {
    let actual = Fixture::assemble(&raw_map! {
        "int1" => 1,
        "int2" => "1",
        "int3" => "abc",
        "int4" => true,
    })
    .unwrap();

    assert_eq!(actual.int1, 1);
    assert_eq!(actual.int2, 1);
    assert_eq!(actual.int3, 0);
    assert_eq!(actual.int4, 1);
}

#[test]
fn assemble_string() {
    let actual = Fixture::assemble(&raw_map! {
        "string1" => 1,
        "string2" => "1",
    })
    .unwrap();

    assert_eq!(actual.string1.as_deref(), Some("1"));
    assert_eq!(actual.string2.as_deref(), Some("1"));
}

#[test]
fn assemble_double_and_float() {
    let actual = Fixture::assemble(&raw_map! {
        "double1" => 1.2,
        "double2" => "1.1",
        "float1" => "abc",
        "float2" => "1.3",
    })
    .unwrap();

    assert_eq!(actual.double1, 1.2);
    assert_eq!(actual.double2, 1.1);
    assert_eq!(actual.float1, 0.0);
    assert_eq!(actual.float2, 1.3_f32);
}

#[test]
fn assemble_boolean() {
    let actual = Fixture::assemble(&raw_map! {
        "bool1" => 2,
        "bool2" => "true",
        "bool3" => true,
        "bool4" => "0",
    })
    .unwrap();

    assert!(actual.bool1);
    assert!(actual.bool2);
    assert!(actual.bool3);
    assert!(!actual.bool4);
}

#[test]
fn assemble_list() {
    let actual = Fixture::assemble(&raw_map! {
        "array1" => 2,
        "array2" => vec![Value::List(vec![])],
    })
    .unwrap();

    assert_eq!(actual.array1, [Value::Int(2)]);
    assert_eq!(actual.array2, [Value::List(vec![])]);
}

#[test]
fn assemble_temporal() {
    let actual = Fixture::assemble(&raw_map! {
        "datetime1" => "2015-12-21 01:23:45",
        "datetime2" => at(2015, 12, 21, 0, 0, 0),
    })
    .unwrap();

    assert_eq!(actual.datetime1, Some(at(2015, 12, 21, 1, 23, 45)));
    assert_eq!(actual.datetime2, Some(at(2015, 12, 21, 0, 0, 0)));
}

#[test]
fn assemble_container() {
    let actual = Fixture::assemble(&raw_map! {
        "container1" => vec![Value::Int(2), Value::Int(3)],
        "container2" => ArrayObject::from(vec![Value::Int(3)]),
        "container3" => 4,
    })
    .unwrap();

    assert_eq!(actual.container1, Some(ArrayObject::from(vec![Value::Int(2), Value::Int(3)])));
    assert_eq!(actual.container2, Some(ArrayObject::from(vec![Value::Int(3)])));
    assert_eq!(actual.container3, Some(ArrayObject::from(vec![Value::Int(4)])));
}

#[test]
fn assemble_instance() {
    let instance = Arc::new(Fixture::default());
    let actual = Fixture::assemble(&raw_map! {
        "instance1" => ObjectRef::from_arc(instance.clone()),
    })
    .unwrap();

    assert!(Arc::ptr_eq(&instance, actual.instance1.as_ref().unwrap()));
}

#[test]
fn assemble_instance_of_unrelated_type() {
    let err = Fixture::assemble(&raw_map! {
        "int1" => 5,
        "instance1" => ObjectRef::new(Stranger::default()),
    })
    .unwrap_err();

    assert!(matches!(
        err,
        AssembleError::TypeMismatch { found: ValueKind::Object, .. }
    ));
    assert_eq!(err.field(), Some("instance1"));
}

#[test]
fn assemble_null() {
    let actual = Fixture::assemble(&raw_map! {
        "int1" => Value::Null,
        "string1" => Value::Null,
        "double1" => Value::Null,
        "float1" => Value::Null,
        "bool1" => Value::Null,
        "array1" => Value::Null,
        "datetime1" => Value::Null,
        "instance1" => Value::Null,
    })
    .unwrap();

    assert_eq!(actual.int1, 0);
    assert_eq!(actual.string1, None);
    assert_eq!(actual.double1, 0.0);
    assert_eq!(actual.float1, 0.0);
    assert!(!actual.bool1);
    assert!(actual.array1.is_empty());
    assert_eq!(actual.datetime1, None);
    assert!(actual.instance1.is_none());
}

#[test]
fn invalid_temporal_aborts() {
    let err = Fixture::assemble(&raw_map! {
        "int1" => 1,
        "datetime1" => "next tuesday",
    })
    .unwrap_err();

    assert_eq!(
        err,
        AssembleError::InvalidTemporal {
            type_path: <Fixture as crate::info::TypePath>::type_path(),
            field: "datetime1".into(),
            input: "next tuesday".into(),
        },
    );
}

#[test]
fn assemble_is_repeatable() {
    let raw = raw_map! { "int1" => "7", "string1" => 8, "bool1" => "yes" };
    let first = Fixture::assemble(&raw).unwrap();
    let second = Fixture::assemble(&raw).unwrap();

    assert_eq!((first.int1, &first.string1, first.bool1), (second.int1, &second.string1, second.bool1));
}

// -----------------------------------------------------------------------------
// End to end

#[derive(Object, Default, Debug)]
struct Account {
    id: i64,
    name: Option<String>,
    active: bool,
    created_at: Option<NaiveDateTime>,
}

impl Assemble for Account {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["id"]).as_integer()
            .select(["name"]).as_string()
            .select(["active"]).as_boolean()
            .select(["created_at"]).as_temporal();
        Ok(())
    }
}

#[test]
fn end_to_end() {
    let account = Account::assemble(&raw_map! {
        "id" => "42",
        "name" => 7,
        "active" => "yes",
        "created_at" => "2020-01-01 00:00:00",
    })
    .unwrap();

    assert_eq!(account.id, 42);
    assert_eq!(account.name.as_deref(), Some("7"));
    assert!(account.active);
    assert_eq!(account.created_at, Some(at(2020, 1, 1, 0, 0, 0)));
}

#[test]
fn end_to_end_from_json() {
    let raw: RawMap = serde_json::from_str(
        r#"{"id":"42","name":7,"active":"yes","created_at":"2020-01-01 00:00:00","extra":1}"#,
    )
    .unwrap();
    let account = Account::assemble(&raw).unwrap();

    assert_eq!(account.id, 42);
    assert_eq!(account.name.as_deref(), Some("7"));
    assert!(account.active);
    assert_eq!(account.created_at, Some(at(2020, 1, 1, 0, 0, 0)));
}

// -----------------------------------------------------------------------------
// Pipeline branches

#[derive(Object, Default, Debug)]
struct Profile {
    secret: Option<String>,
    note: Value,
    count: i64,
    full_name: Option<String>,
    first: Option<String>,
    last: Option<String>,
    untyped: Value,
    flag: bool,
    wrapped: Vec<Value>,
    number: i64,
    ratio: f64,
    label: Option<String>,
}

impl Assemble for Profile {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["secret"]).as_string().ignore()
            .select(["full_name"]).as_string().projection(
                |raw, _| {
                    let part = |key: &str| raw.get(key).and_then(Value::as_str).unwrap_or_default();
                    Value::String(format!("{} {}", part("first"), part("last")))
                },
                |plain, key| match plain.get(key) {
                    Some(Value::String(s)) => Value::String(s.to_uppercase()),
                    _ => Value::Null,
                },
            )
            .select(["first", "last"]).as_string()
            .select(["untyped"]).not_empty()
            .select(["flag"]).as_boolean()
            .select(["wrapped"]).as_array()
            .select(["number"]).as_integer()
            .select(["ratio"]).as_float()
            .select(["label"]).as_string();
        Ok(())
    }
}

#[test]
fn ignored_and_unknown_keys() {
    let profile = Profile::assemble(&raw_map! {
        "secret" => "hunter2",
        "no_such_field" => 1,
    })
    .unwrap();

    assert_eq!(profile.secret, None);
}

#[test]
fn unmanaged_fields_are_assigned_as_is() {
    let raw = raw_map! { "note" => vec![Value::from("x"), Value::Int(1)] };
    let profile = Profile::assemble(&raw).unwrap();
    assert_eq!(profile.note, Value::List(vec![Value::from("x"), Value::Int(1)]));

    // No cast happens, so a field of another type refuses the raw value.
    let err = Profile::assemble(&raw_map! { "count" => "3" }).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::Rejected {
            source: FieldError::Mismatch { found: ValueKind::String, .. },
            ..
        }
    ));
}

#[test]
fn projection_runs_before_cast() {
    let profile = Profile::assemble(&raw_map! {
        "first" => "Ada",
        "last" => "Lovelace",
        "full_name" => Value::Null,
    })
    .unwrap();

    assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
}

#[test]
fn untyped_field_accepts_only_null_and_objects() {
    let profile = Profile::assemble(&raw_map! { "untyped" => Value::Null }).unwrap();
    assert_eq!(profile.untyped, Value::Null);

    let container = Value::Container(ArrayObject::from(vec![Value::Int(1)]));
    let profile = Profile::assemble(&raw_map! { "untyped" => container.clone() }).unwrap();
    assert_eq!(profile.untyped, container);

    let err = Profile::assemble(&raw_map! { "untyped" => "text" }).unwrap_err();
    assert!(matches!(err, AssembleError::TypeMismatch { found: ValueKind::String, .. }));
}

#[test]
fn objects_under_scalar_tags() {
    let tag = ObjectRef::new(Stranger::default());
    let profile = Profile::assemble(&raw_map! {
        "flag" => tag.clone(),
        "wrapped" => tag.clone(),
        "number" => tag.clone(),
        "ratio" => tag.clone(),
        "label" => tag.clone(),
    })
    .unwrap();

    assert!(profile.flag);
    assert_eq!(profile.wrapped, [Value::Object(tag)]);
    assert_eq!(profile.number, 1);
    assert_eq!(profile.ratio, 1.0);
    assert_eq!(
        profile.label.as_deref(),
        Some(<Stranger as crate::info::TypePath>::type_path()),
    );
}

#[test]
fn builtin_objects_under_scalar_tags() {
    let created = at(2020, 1, 1, 8, 30, 0);
    let profile = Profile::assemble(&raw_map! {
        "number" => created,
        "ratio" => ArrayObject::from(vec![Value::Int(4)]),
        "label" => created,
        "wrapped" => ArrayObject::from(vec![Value::Int(4)]),
    })
    .unwrap();

    assert_eq!(profile.number, 1);
    assert_eq!(profile.ratio, 1.0);
    assert_eq!(profile.label.as_deref(), Some("2020-01-01 08:30:00"));
    assert_eq!(profile.wrapped, [Value::Int(4)]);

    let profile = Profile::assemble(&raw_map! { "number" => ArrayObject::default() }).unwrap();
    assert_eq!(profile.number, 0);

    let err = Profile::assemble(&raw_map! { "label" => ArrayObject::default() }).unwrap_err();
    assert!(matches!(err, AssembleError::TypeMismatch { found: ValueKind::Container, .. }));
}

#[test]
fn rules_are_inert_by_default() {
    // `untyped` carries `not_empty`, which null fails.
    let registry = MetadataRegistry::new();
    let assembler = Assembler::with_registry(&registry);
    let profile: Profile = assembler.assemble(&raw_map! { "untyped" => Value::Null }).unwrap();
    assert_eq!(profile.untyped, Value::Null);
}

// -----------------------------------------------------------------------------
// Inheritance

#[derive(Object, Default)]
struct Animal {
    name: String,
}

#[derive(Object, Default)]
#[object(extends(Animal))]
struct Dog {
    name: String,
}

#[derive(Object, Default)]
#[object(extends(Dog))]
struct Puppy {
    name: String,
}

#[derive(Object, Default, Debug)]
struct Shelter {
    resident: Option<ObjectRef>,
    dog: Option<ObjectRef>,
}

impl Assemble for Shelter {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["resident"]).as_instance::<Animal>()
            .select(["dog"]).as_instance::<Dog>();
        Ok(())
    }
}

#[test]
fn subtypes_pass_instance_checks() {
    let puppy = ObjectRef::new(Puppy::default());
    let shelter = Shelter::assemble(&raw_map! {
        "resident" => puppy.clone(),
        "dog" => ObjectRef::new(Dog::default()),
    })
    .unwrap();

    assert_eq!(shelter.resident, Some(puppy));
    assert!(shelter.dog.unwrap().is::<Dog>());

    let err = Shelter::assemble(&raw_map! { "dog" => ObjectRef::new(Animal::default()) }).unwrap_err();
    assert!(matches!(err, AssembleError::TypeMismatch { .. }));
}

// -----------------------------------------------------------------------------
// Contract errors

#[derive(Object, Default, Debug)]
struct Undeclared {
    id: i64,
}

impl Assemble for Undeclared {}

#[test]
fn missing_mapping_is_an_error() {
    let err = Undeclared::assemble(&raw_map! { "id" => 1 }).unwrap_err();
    assert!(matches!(
        err,
        AssembleError::Mapping(MappingError::Unimplemented { .. })
    ));
    assert!(Undeclared::default().to_raw().is_err());
}

// -----------------------------------------------------------------------------
// Strict validation

#[derive(Object, Default, Debug)]
struct Signup {
    email: Option<String>,
    age: i64,
    plan: Option<String>,
}

impl Assemble for Signup {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["email"]).as_string().not_empty().email()
            .select(["age"]).as_integer().between(18, 130)
            .select(["plan"]).as_string().one_of(["free", "pro"]);
        Ok(())
    }
}

#[test]
fn strict_mode_enforces_rules() {
    let registry = MetadataRegistry::new();
    let strict = Assembler::with_registry(&registry).with_config(AssembleConfig::strict());

    let ok: Signup = strict
        .assemble(&raw_map! { "email" => "a@b.io", "age" => "30", "plan" => "pro" })
        .unwrap();
    assert_eq!(ok.age, 30);

    let err = strict
        .assemble::<Signup>(&raw_map! { "email" => "a@b.io", "age" => "12" })
        .unwrap_err();
    assert_eq!(
        err,
        AssembleError::Validation {
            type_path: <Signup as crate::info::TypePath>::type_path(),
            field: "age".into(),
            source: RuleViolation {
                rule: RuleKind::Between,
                value: Value::Int(12),
            },
        },
    );

    let err = strict
        .assemble::<Signup>(&raw_map! { "email" => Value::Null })
        .unwrap_err();
    assert!(matches!(
        err,
        AssembleError::Validation { source: RuleViolation { rule: RuleKind::NotEmpty, .. }, .. }
    ));

    // The same input passes when rules are inert.
    let loose = Assembler::with_registry(&registry);
    assert!(loose.assemble::<Signup>(&raw_map! { "age" => "12", "plan" => "gold" }).is_ok());
}

// -----------------------------------------------------------------------------
// Disassembly

#[derive(Object, Default)]
struct Event {
    id: i64,
    title: Option<String>,
    starts_at: Option<NaiveDateTime>,
    attendees: Option<ArrayObject>,
    token: Option<String>,
    slug: Option<String>,
    raw: Value,
}

impl Assemble for Event {
    fn declare_mapping(m: &mut ObjectMapper) -> Result<(), MappingError> {
        m.select(["id"]).as_integer()
            .select(["title"]).as_string()
            .select(["starts_at"]).as_temporal()
            .select(["attendees"]).as_container()
            .select(["token"]).ignore()
            .select(["slug"]).as_string().projection(
                |raw, key| raw.get(key).cloned().unwrap_or_default(),
                |plain, _| match plain.get("title") {
                    Some(Value::String(title)) => Value::String(title.to_lowercase().replace(' ', "-")),
                    _ => Value::Null,
                },
            );
        Ok(())
    }

    fn temporal_format() -> &'static str {
        "%d/%m/%Y %H:%M"
    }
}

fn sample_event() -> Event {
    Event::assemble(&raw_map! {
        "id" => 3,
        "title" => "Rust Meetup",
        "starts_at" => "24/12/2021 18:30",
        "attendees" => vec![Value::from("ann"), Value::from("bob")],
        "token" => "xyz",
        "raw" => 9,
    })
    .unwrap()
}

#[test]
fn custom_temporal_format_round_trips() {
    let event = sample_event();
    assert_eq!(event.starts_at, Some(at(2021, 12, 24, 18, 30, 0)));
    assert_eq!(event.token, None);

    let plain = event.to_raw().unwrap();
    assert_eq!(plain.get("starts_at"), Some(&Value::from("24/12/2021 18:30")));
}

#[test]
fn disassemble_reverses_casts() {
    let plain = sample_event().to_raw().unwrap();

    assert_eq!(
        plain.keys().collect::<Vec<_>>(),
        ["id", "title", "starts_at", "attendees", "slug", "raw"],
    );
    assert_eq!(plain.get("id"), Some(&Value::Int(3)));
    assert_eq!(
        plain.get("attendees"),
        Some(&Value::List(vec![Value::from("ann"), Value::from("bob")])),
    );
    assert_eq!(plain.get("slug"), Some(&Value::from("rust-meetup")));
    assert_eq!(plain.get("raw"), Some(&Value::Int(9)));
    assert!(!plain.contains_key("token"));
}

#[test]
fn disassemble_with_filter() {
    let event = sample_event();
    let plain = event.disassemble(&["title", "token", "bogus"]).unwrap();

    assert_eq!(plain.keys().collect::<Vec<_>>(), ["title"]);

    // Disassemblers only see the emitted fields.
    let plain = event.disassemble(&["slug"]).unwrap();
    assert_eq!(plain.get("slug"), Some(&Value::Null));
}

#[test]
fn disassembled_mapping_assembles_again() {
    let first = sample_event();
    let plain = first.disassemble(&["id", "title", "starts_at", "attendees"]).unwrap();
    let second = Event::assemble(&plain).unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.title, first.title);
    assert_eq!(second.starts_at, first.starts_at);
    assert_eq!(second.attendees, first.attendees);
}

#[test]
fn serialized_writes_disassembled_form() {
    let json = serde_json::to_value(crate::serde::Serialized(&sample_event())).unwrap();
    assert_eq!(json["starts_at"], "24/12/2021 18:30");
    assert_eq!(json["attendees"], serde_json::json!(["ann", "bob"]));
    assert!(json.get("token").is_none());
}
