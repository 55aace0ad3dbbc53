//! The request validator.
//!
//! [`validate`] turns a matched [`Request`] into typed [`Arguments`] or a
//! [`ValidationErrors`] list. Path parameters, query parameters, body
//! parameters and nested model fields all go through the same routine:
//!
//! ```text
//! raw value ──absent──▶ fallback (or `missing`)
//!     │
//!     ▼
//!  coerce to Kind ──fail──▶ `*_parsing` / `*_type`
//!     │
//!     ▼
//!  gt → ge → lt → le → min_length → max_length → enum   (first failure wins)
//! ```
//!
//! Errors never short-circuit across parameters: every parameter is checked
//! and every failure is reported together.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::error::Error;
use crate::request::Request;
use crate::schema::{Body, Constraints, Fallback, Kind, Model, Param, Schema, Source};

// ── Errors ────────────────────────────────────────────────────────────────────

/// What went wrong with one value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Missing,
    IntParsing,
    FloatParsing,
    BoolParsing,
    StringType,
    ListType,
    ModelType,
    Enum,
    GreaterThan,
    GreaterThanEqual,
    LessThan,
    LessThanEqual,
    StringTooShort,
    StringTooLong,
    JsonInvalid,
}

/// One rejected value.
///
/// `loc` starts with the source (`path`, `query` or `body`) followed by the
/// wire name and, for body payloads, the field path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Value>,
}

impl ValidationError {
    fn new(kind: ErrorKind, loc: &[String], msg: impl Into<String>, input: Value) -> Self {
        Self { kind, loc: loc.to_vec(), msg: msg.into(), input, ctx: None }
    }

    fn with_ctx(mut self, ctx: Value) -> Self {
        self.ctx = Some(ctx);
        self
    }
}

/// Every validation failure of one request, in declaration order.
#[derive(Debug, Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

/// The validated, typed inputs of one request, in the order the route
/// declares them: path and query parameters first, then body parameters.
///
/// Absent optional values are present here as `null`.
#[derive(Debug, Default)]
pub struct Arguments {
    values: Vec<(&'static str, Value)>,
}

impl Arguments {
    /// The raw validated value of `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Deserializes the validated value of `name` into `T`.
    ///
    /// `Option<T>` maps `null` to `None`; models come out as their serde
    /// struct.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, Error> {
        let value = self.value(name).ok_or_else(|| Error::MissingArgument(name.to_owned()))?;
        serde_json::from_value(value.clone()).map_err(|source| Error::Argument { name: name.to_owned(), source })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    fn push(&mut self, name: &'static str, value: Value) {
        self.values.push((name, value));
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Validates `req` against `schema`.
///
/// `req` must already carry the path parameters matched by the router.
pub fn validate(schema: &Schema, req: &Request) -> Result<Arguments, ValidationErrors> {
    let mut args = Arguments::default();
    let mut errors = Vec::new();
    let query = req.query_pairs();

    for param in &schema.params {
        let loc = [param.source.as_str().to_owned(), param.wire_name().to_owned()];
        let raw = extract(param, req, &query);
        match resolve(raw, param.kind, param.default, &param.constraints, &loc) {
            Ok(value) => args.push(param.name, value),
            Err(mut e) => errors.append(&mut e),
        }
    }

    if let Some(body) = &schema.body {
        validate_body(body, req.body(), &mut args, &mut errors);
    }

    if errors.is_empty() { Ok(args) } else { Err(ValidationErrors(errors)) }
}

fn extract(param: &Param, req: &Request, query: &[(String, String)]) -> Option<Value> {
    let wire = param.wire_name();
    match (param.source, param.kind) {
        (Source::Path, _) => req.param(wire).map(Value::from),
        (Source::Query, Kind::StrList) => {
            let all: Vec<Value> = query.iter()
                .filter(|(k, _)| k == wire)
                .map(|(_, v)| Value::from(v.as_str()))
                .collect();
            (!all.is_empty()).then_some(Value::Array(all))
        }
        // Last occurrence wins for scalars.
        (Source::Query, _) => query.iter()
            .rev()
            .find(|(k, _)| k == wire)
            .map(|(_, v)| Value::from(v.as_str())),
    }
}

fn validate_body(body: &Body, bytes: &[u8], args: &mut Arguments, errors: &mut Vec<ValidationError>) {
    let base = ["body".to_owned()];

    let document = if bytes.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(v) => Some(v),
            Err(e) => {
                let input = Value::from(String::from_utf8_lossy(bytes).into_owned());
                errors.push(ValidationError::new(
                    ErrorKind::JsonInvalid,
                    &base,
                    format!("JSON decode error: {e}"),
                    input,
                ));
                return;
            }
        }
    };

    if !body.is_embedded() {
        if let [param] = body.params.as_slice() {
            match resolve(document, param.kind, param.default, &param.constraints, &base) {
                Ok(value) => args.push(param.name, value),
                Err(mut e) => errors.append(&mut e),
            }
        }
        return;
    }

    let mut object = match document {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(other) => {
            errors.push(model_type(&base, other));
            return;
        }
    };
    for param in &body.params {
        let loc = child(&base, param.name);
        match resolve(object.remove(param.name), param.kind, param.default, &param.constraints, &loc) {
            Ok(value) => args.push(param.name, value),
            Err(mut e) => errors.append(&mut e),
        }
    }
}

// ── Shared routine ────────────────────────────────────────────────────────────

fn resolve(
    raw: Option<Value>,
    kind: Kind,
    fallback: Fallback,
    constraints: &Constraints,
    loc: &[String],
) -> Result<Value, Vec<ValidationError>> {
    let Some(raw) = raw else {
        return fallback.value().ok_or_else(|| {
            vec![ValidationError::new(ErrorKind::Missing, loc, "Field required", Value::Null)]
        });
    };
    if raw.is_null() && fallback == Fallback::Null {
        return Ok(Value::Null);
    }
    let value = coerce(kind, raw, loc)?;
    check(kind, constraints, &value, loc).map_err(|e| vec![e])?;
    Ok(value)
}

fn coerce(kind: Kind, raw: Value, loc: &[String]) -> Result<Value, Vec<ValidationError>> {
    let fail = |err, msg: &str, raw: Value| Err(vec![ValidationError::new(err, loc, msg, raw)]);
    match kind {
        Kind::Int => match to_int(&raw) {
            Some(i) => Ok(Value::from(i)),
            None => fail(
                ErrorKind::IntParsing,
                "Input should be a valid integer, unable to parse value as an integer",
                raw,
            ),
        },
        Kind::Float => match to_float(&raw) {
            Some(f) => Ok(Value::from(f)),
            None => fail(
                ErrorKind::FloatParsing,
                "Input should be a valid number, unable to parse value as a number",
                raw,
            ),
        },
        Kind::Bool => match to_bool(&raw) {
            Some(b) => Ok(Value::Bool(b)),
            None => fail(
                ErrorKind::BoolParsing,
                "Input should be a valid boolean, unable to interpret input",
                raw,
            ),
        },
        Kind::Str => match raw {
            Value::String(_) => Ok(raw),
            _ => fail(ErrorKind::StringType, "Input should be a valid string", raw),
        },
        Kind::Choice(values) => match raw {
            Value::String(_) => Ok(raw),
            _ => Err(vec![enum_error(values, loc, raw)]),
        },
        Kind::StrList => match raw {
            Value::Array(items) => {
                let errors: Vec<ValidationError> = items.iter()
                    .enumerate()
                    .filter(|(_, v)| !v.is_string())
                    .map(|(i, v)| ValidationError::new(
                        ErrorKind::StringType,
                        &child(loc, &i.to_string()),
                        "Input should be a valid string",
                        v.clone(),
                    ))
                    .collect();
                if errors.is_empty() { Ok(Value::Array(items)) } else { Err(errors) }
            }
            _ => fail(ErrorKind::ListType, "Input should be a valid list", raw),
        },
        Kind::Model(model) => match raw {
            Value::Object(map) => validate_model(model, map, loc),
            other => Err(vec![model_type(loc, other)]),
        },
    }
}

/// Validates every field of `model`, collecting all failures. Unknown keys
/// are dropped.
fn validate_model(model: &Model, mut map: Map<String, Value>, loc: &[String]) -> Result<Value, Vec<ValidationError>> {
    let mut out = Map::new();
    let mut errors = Vec::new();
    for field in model.fields {
        let floc = child(loc, field.name);
        match resolve(map.remove(field.name), field.kind, field.default, &field.constraints, &floc) {
            Ok(value) => {
                out.insert(field.name.to_owned(), value);
            }
            Err(mut e) => errors.append(&mut e),
        }
    }
    if errors.is_empty() { Ok(Value::Object(out)) } else { Err(errors) }
}

type Bound = (Option<f64>, ErrorKind, &'static str, &'static str, fn(f64, f64) -> bool);

fn check(kind: Kind, c: &Constraints, value: &Value, loc: &[String]) -> Result<(), ValidationError> {
    if kind.is_numeric() {
        if let Some(n) = value.as_f64() {
            let bounds: [Bound; 4] = [
                (c.gt, ErrorKind::GreaterThan, "gt", "greater than", |n, b| n > b),
                (c.ge, ErrorKind::GreaterThanEqual, "ge", "greater than or equal to", |n, b| n >= b),
                (c.lt, ErrorKind::LessThan, "lt", "less than", |n, b| n < b),
                (c.le, ErrorKind::LessThanEqual, "le", "less than or equal to", |n, b| n <= b),
            ];
            for (bound, err, key, phrase, holds) in bounds {
                let Some(b) = bound else { continue };
                if !holds(n, b) {
                    return Err(ValidationError::new(err, loc, format!("Input should be {phrase} {b}"), value.clone())
                        .with_ctx(json!({ key: b })));
                }
            }
        }
    }

    if let Some(s) = value.as_str() {
        let len = s.chars().count();
        if let Some(min) = c.min_length {
            if len < min {
                return Err(ValidationError::new(
                    ErrorKind::StringTooShort,
                    loc,
                    format!("String should have at least {min} {}", characters(min)),
                    value.clone(),
                ).with_ctx(json!({ "min_length": min })));
            }
        }
        if let Some(max) = c.max_length {
            if len > max {
                return Err(ValidationError::new(
                    ErrorKind::StringTooLong,
                    loc,
                    format!("String should have at most {max} {}", characters(max)),
                    value.clone(),
                ).with_ctx(json!({ "max_length": max })));
            }
        }
        if let Kind::Choice(values) = kind {
            if !values.contains(&s) {
                return Err(enum_error(values, loc, value.clone()));
            }
        }
    }

    Ok(())
}

// ── Coercions ─────────────────────────────────────────────────────────────────

fn to_int(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e18)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_float(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn to_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
            "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn child(loc: &[String], segment: &str) -> Vec<String> {
    let mut loc = loc.to_vec();
    loc.push(segment.to_owned());
    loc
}

fn characters(n: usize) -> &'static str {
    if n == 1 { "character" } else { "characters" }
}

fn model_type(loc: &[String], input: Value) -> ValidationError {
    ValidationError::new(
        ErrorKind::ModelType,
        loc,
        "Input should be a valid dictionary or object to extract fields from",
        input,
    )
}

fn enum_error(values: &[&str], loc: &[String], input: Value) -> ValidationError {
    let expected = expected_choices(values);
    ValidationError::new(ErrorKind::Enum, loc, format!("Input should be {expected}"), input)
        .with_ctx(json!({ "expected": expected }))
}

/// `'a', 'b' or 'c'`
fn expected_choices(values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::method::Method;
    use crate::schema::{BodyParam, Field};

    static ITEM: Model = Model::new("Item", &[
        Field::new("name", Kind::Str),
        Field::new("description", Kind::Str).optional().max_length(300),
        Field::new("price", Kind::Float).gt(0.0),
        Field::new("tax", Kind::Float).optional(),
    ]);

    static OWNER: Model = Model::new("Owner", &[
        Field::new("username", Kind::Str),
        Field::new("item", Kind::Model(&ITEM)),
    ]);

    fn request(target: &str, body: &str, params: &[(&str, &str)]) -> Request {
        let mut req = Request::new(Method::Get, target, body.to_owned());
        let params: HashMap<String, String> = params.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        req.set_params(params);
        req
    }

    fn kinds(errors: &ValidationErrors) -> Vec<(ErrorKind, Vec<&str>)> {
        errors.errors().iter()
            .map(|e| (e.kind, e.loc.iter().map(String::as_str).collect()))
            .collect()
    }

    #[test]
    fn missing_required_query_is_reported_without_coercion() {
        let schema = Schema::new().param(Param::query("q", Kind::Str).max_length(3));
        let err = validate(&schema, &request("/ellipsis", "", &[])).unwrap_err();
        assert_eq!(kinds(&err), vec![(ErrorKind::Missing, vec!["query", "q"])]);
        assert_eq!(err.errors()[0].input, Value::Null);
    }

    #[test]
    fn absent_optional_takes_its_fallback() {
        let schema = Schema::new()
            .param(Param::query("skip", Kind::Int).default(Fallback::Int(0)))
            .param(Param::query("short", Kind::Bool).default(Fallback::Bool(false)))
            .param(Param::query("q", Kind::Str).optional());
        let args = validate(&schema, &request("/items", "", &[])).unwrap();
        assert_eq!(args.get::<i64>("skip").unwrap(), 0);
        assert!(!args.get::<bool>("short").unwrap());
        assert_eq!(args.get::<Option<String>>("q").unwrap(), None);
        assert_eq!(args.value("q"), Some(&Value::Null));
    }

    #[test]
    fn coercion_failure_names_the_input() {
        let schema = Schema::new().param(Param::path("item_id", Kind::Int));
        let err = validate(&schema, &request("/item/foo", "", &[("item_id", "foo")])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::IntParsing);
        assert_eq!(err.errors()[0].input, json!("foo"));
    }

    #[test]
    fn query_booleans_accept_common_spellings() {
        let schema = Schema::new().param(Param::query("short", Kind::Bool));
        for (raw, expected) in [("true", true), ("On", true), ("1", true), ("no", false), ("0", false)] {
            let args = validate(&schema, &request(&format!("/x?short={raw}"), "", &[])).unwrap();
            assert_eq!(args.get::<bool>("short").unwrap(), expected, "{raw}");
        }
        let err = validate(&schema, &request("/x?short=maybe", "", &[])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::BoolParsing);
    }

    #[test]
    fn repeated_list_values_keep_request_order() {
        let schema = Schema::new()
            .param(Param::query("q", Kind::StrList).alias("item-query").optional().deprecated());
        let args = validate(&schema, &request("/list?item-query=aaa&x=1&item-query=bbb", "", &[])).unwrap();
        assert_eq!(args.get::<Option<Vec<String>>>("q").unwrap(), Some(vec!["aaa".into(), "bbb".into()]));
    }

    #[test]
    fn repeated_scalar_takes_last_occurrence() {
        let schema = Schema::new().param(Param::query("limit", Kind::Int));
        let args = validate(&schema, &request("/items?limit=1&limit=3", "", &[])).unwrap();
        assert_eq!(args.get::<i64>("limit").unwrap(), 3);
    }

    #[test]
    fn bounds_are_checked_in_order() {
        let schema = Schema::new().param(Param::query("size", Kind::Float).gt(0.0).lt(10.5));
        let err = validate(&schema, &request("/x?size=0", "", &[])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::GreaterThan);
        assert_eq!(err.errors()[0].msg, "Input should be greater than 0");
        assert_eq!(err.errors()[0].ctx, Some(json!({ "gt": 0.0 })));

        let err = validate(&schema, &request("/x?size=10.5", "", &[])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::LessThan);

        let args = validate(&schema, &request("/x?size=10.4", "", &[])).unwrap();
        assert_eq!(args.get::<f64>("size").unwrap(), 10.4);
    }

    #[test]
    fn inclusive_bounds_admit_the_edges() {
        let schema = Schema::new().param(Param::path("item_id", Kind::Int).ge(0.0).le(1000.0));
        assert!(validate(&schema, &request("/", "", &[("item_id", "0")])).is_ok());
        assert!(validate(&schema, &request("/", "", &[("item_id", "1000")])).is_ok());
        let err = validate(&schema, &request("/", "", &[("item_id", "1001")])).unwrap_err();
        assert_eq!(kinds(&err), vec![(ErrorKind::LessThanEqual, vec!["path", "item_id"])]);
        let err = validate(&schema, &request("/", "", &[("item_id", "-1")])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::GreaterThanEqual);
    }

    #[test]
    fn string_length_counts_characters() {
        let schema = Schema::new().param(Param::query("q", Kind::Str).min_length(3).max_length(3));
        assert!(validate(&schema, &request("/x?q=%C3%A9%C3%A9%C3%A9", "", &[])).is_ok());
        let err = validate(&schema, &request("/x?q=ab", "", &[])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::StringTooShort);
        assert_eq!(err.errors()[0].msg, "String should have at least 3 characters");
        let err = validate(&schema, &request("/x?q=abcd", "", &[])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::StringTooLong);
    }

    #[test]
    fn closed_enum_rejects_unknown_tokens() {
        let schema = Schema::new().param(Param::path("model_name", Kind::Choice(&["alexnet", "resnet", "lenet"])));
        assert!(validate(&schema, &request("/", "", &[("model_name", "lenet")])).is_ok());
        let err = validate(&schema, &request("/", "", &[("model_name", "lanet")])).unwrap_err();
        assert_eq!(err.errors()[0].kind, ErrorKind::Enum);
        assert_eq!(err.errors()[0].msg, "Input should be 'alexnet', 'resnet' or 'lenet'");
    }

    #[test]
    fn errors_across_parameters_are_all_collected() {
        let schema = Schema::new()
            .param(Param::path("item_id", Kind::Int).le(1000.0))
            .param(Param::query("size", Kind::Float).gt(0.0))
            .param(Param::query("q", Kind::Str));
        let err = validate(&schema, &request("/x?size=abc", "", &[("item_id", "1001")])).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (ErrorKind::LessThanEqual, vec!["path", "item_id"]),
                (ErrorKind::FloatParsing, vec!["query", "size"]),
                (ErrorKind::Missing, vec!["query", "q"]),
            ]
        );
    }

    #[test]
    fn flat_body_validates_model_fields() {
        let schema = Schema::new().body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM))));
        let body = r#"{"name":"foo","price":"2.5","extra":true}"#;
        let args = validate(&schema, &request("/", body, &[])).unwrap();
        assert_eq!(
            args.value("item"),
            Some(&json!({ "name": "foo", "description": null, "price": 2.5, "tax": null }))
        );

        let err = validate(&schema, &request("/", r#"{"price":0,"description":null}"#, &[])).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (ErrorKind::Missing, vec!["body", "name"]),
                (ErrorKind::GreaterThan, vec!["body", "price"]),
            ]
        );
    }

    #[test]
    fn missing_flat_body_is_one_error() {
        let schema = Schema::new().body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM))));
        let err = validate(&schema, &request("/", "", &[])).unwrap_err();
        assert_eq!(kinds(&err), vec![(ErrorKind::Missing, vec!["body"])]);
    }

    #[test]
    fn embedded_body_unwraps_one_level() {
        let schema = Schema::new().body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM)).embed()));
        let args = validate(&schema, &request("/", r#"{"item":{"name":"foo","price":1}}"#, &[])).unwrap();
        assert_eq!(args.value("item").unwrap()["price"], json!(1.0));

        let err = validate(&schema, &request("/", r#"{"name":"foo","price":1}"#, &[])).unwrap_err();
        assert_eq!(kinds(&err), vec![(ErrorKind::Missing, vec!["body", "item"])]);
    }

    #[test]
    fn nested_models_report_full_paths() {
        let schema = Schema::new().body(Body::new().param(BodyParam::new("owner", Kind::Model(&OWNER))));
        let err = validate(&schema, &request("/", r#"{"username":1,"item":{"name":"x","price":-1}}"#, &[])).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (ErrorKind::StringType, vec!["body", "username"]),
                (ErrorKind::GreaterThan, vec!["body", "item", "price"]),
            ]
        );
    }

    #[test]
    fn malformed_json_is_reported_alongside_query_errors() {
        let schema = Schema::new()
            .param(Param::query("q", Kind::Str))
            .body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM))));
        let err = validate(&schema, &request("/", "{not json", &[])).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                (ErrorKind::Missing, vec!["query", "q"]),
                (ErrorKind::JsonInvalid, vec!["body"]),
            ]
        );
    }

    #[test]
    fn explicit_null_only_where_fallback_is_null() {
        let schema = Schema::new().body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM))));
        let err = validate(&schema, &request("/", r#"{"name":"x","price":null,"tax":null}"#, &[])).unwrap_err();
        assert_eq!(kinds(&err), vec![(ErrorKind::FloatParsing, vec!["body", "price"])]);
    }

    #[test]
    fn undeclared_argument_is_an_error() {
        let args = Arguments::default();
        assert!(matches!(args.get::<i64>("nope"), Err(Error::MissingArgument(_))));
    }

    #[test]
    fn expected_choices_reads_naturally() {
        assert_eq!(expected_choices(&["a"]), "'a'");
        assert_eq!(expected_choices(&["a", "b"]), "'a' or 'b'");
    }
}
