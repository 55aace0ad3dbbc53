//! OpenAPI 3.1 document generation.
//!
//! The document is derived from the same [`Schema`]s the validator enforces,
//! so it cannot drift from actual behavior. Parameter metadata that has no
//! effect on validation (title, description, deprecation) only shows up here.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use crate::method::Method;
use crate::router::Endpoint;
use crate::schema::{Body, Constraints, Fallback, Kind, Model};

pub(crate) fn document(title: &str, version: &str, routes: &[(Method, String, Arc<Endpoint>)]) -> Value {
    let mut paths = Map::new();
    let mut components = Map::new();

    for (method, path, endpoint) in routes {
        let operation = operation(endpoint, &mut components);
        let item = paths.entry(path.clone()).or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(item) = item {
            item.insert(method.as_lower().to_owned(), operation);
        }
    }

    json!({
        "openapi": "3.1.0",
        "info": { "title": title, "version": version },
        "paths": paths,
        "components": { "schemas": components },
    })
}

fn operation(endpoint: &Endpoint, components: &mut Map<String, Value>) -> Value {
    let parameters: Vec<Value> = endpoint.schema.params.iter()
        .map(|p| {
            let mut schema = schema_for(p.kind, p.default, &p.constraints, components);
            annotate(&mut schema, p.title, p.description);
            let mut param = json!({
                "name": p.wire_name(),
                "in": p.source.as_str(),
                "required": p.default.is_required(),
                "schema": schema,
            });
            if p.deprecated {
                param["deprecated"] = Value::Bool(true);
            }
            param
        })
        .collect();

    let mut op = json!({
        "parameters": parameters,
        "responses": {
            "200": { "description": "Successful Response" },
            "422": { "description": "Validation Error" },
        },
    });
    if let Some(body) = &endpoint.schema.body {
        op["requestBody"] = request_body(body, components);
    }
    op
}

fn request_body(body: &Body, components: &mut Map<String, Value>) -> Value {
    let required = body.params.iter().any(|p| p.default.is_required());
    let schema = match body.params.as_slice() {
        [single] if !body.is_embedded() => {
            schema_for(single.kind, single.default, &single.constraints, components)
        }
        params => {
            let mut properties = Map::new();
            let mut names = Vec::new();
            for p in params {
                properties.insert(p.name.to_owned(), schema_for(p.kind, p.default, &p.constraints, components));
                if p.default.is_required() {
                    names.push(Value::from(p.name));
                }
            }
            json!({ "type": "object", "properties": properties, "required": names })
        }
    };
    json!({
        "required": required,
        "content": { "application/json": { "schema": schema } },
    })
}

fn schema_for(kind: Kind, fallback: Fallback, c: &Constraints, components: &mut Map<String, Value>) -> Value {
    let mut schema = match kind {
        Kind::Int => json!({ "type": "integer" }),
        Kind::Float => json!({ "type": "number" }),
        Kind::Str => json!({ "type": "string" }),
        Kind::Bool => json!({ "type": "boolean" }),
        Kind::StrList => json!({ "type": "array", "items": { "type": "string" } }),
        Kind::Choice(values) => json!({ "type": "string", "enum": values }),
        Kind::Model(model) => {
            register(model, components);
            json!({ "$ref": format!("#/components/schemas/{}", model.name) })
        }
    };

    let bounds = [
        ("exclusiveMinimum", c.gt),
        ("minimum", c.ge),
        ("exclusiveMaximum", c.lt),
        ("maximum", c.le),
    ];
    for (key, bound) in bounds {
        if let Some(b) = bound {
            schema[key] = json!(b);
        }
    }
    if let Some(min) = c.min_length {
        schema["minLength"] = json!(min);
    }
    if let Some(max) = c.max_length {
        schema["maxLength"] = json!(max);
    }

    match fallback {
        Fallback::Required => schema,
        Fallback::Null => json!({ "anyOf": [schema, { "type": "null" }] }),
        other => {
            if let Some(default) = other.value() {
                schema["default"] = default;
            }
            schema
        }
    }
}

fn register(model: &Model, components: &mut Map<String, Value>) {
    if components.contains_key(model.name) {
        return;
    }
    // Placeholder first so self-referencing models terminate.
    components.insert(model.name.to_owned(), Value::Null);

    let mut properties = Map::new();
    let mut required = Vec::new();
    for field in model.fields {
        let mut schema = schema_for(field.kind, field.default, &field.constraints, components);
        annotate(&mut schema, field.title, field.description);
        properties.insert(field.name.to_owned(), schema);
        if field.default.is_required() {
            required.push(Value::from(field.name));
        }
    }
    components.insert(
        model.name.to_owned(),
        json!({ "title": model.name, "type": "object", "properties": properties, "required": required }),
    );
}

fn annotate(schema: &mut Value, title: Option<&str>, description: Option<&str>) {
    if let Some(title) = title {
        schema["title"] = json!(title);
    }
    if let Some(description) = description {
        schema["description"] = json!(description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BodyParam, Field, Param, Schema};
    use crate::{Arguments, Json, Router};

    static USER: Model = Model::new("User", &[
        Field::new("username", Kind::Str),
        Field::new("full_name", Kind::Str).optional(),
    ]);

    async fn noop(_: Arguments) -> Json<Value> {
        Json(Value::Null)
    }

    #[test]
    fn documents_parameters_bodies_and_models() {
        let router = Router::new()
            .on(
                Method::Get,
                "/list",
                Schema::new().param(
                    Param::query("q", Kind::StrList).alias("item-query").optional().title("Query String").deprecated(),
                ),
                noop,
            )
            .on(
                Method::Put,
                "/item/{item_id}",
                Schema::new()
                    .param(Param::path("item_id", Kind::Int).ge(0.0).le(1000.0))
                    .body(Body::new()
                        .param(BodyParam::new("user", Kind::Model(&USER)))
                        .param(BodyParam::new("importance", Kind::Int))),
                noop,
            );

        let doc = router.openapi("items", "0.1.0");
        let list = &doc["paths"]["/list"]["get"]["parameters"][0];
        assert_eq!(list["name"], "item-query");
        assert_eq!(list["deprecated"], true);
        assert_eq!(list["required"], false);
        assert_eq!(list["schema"]["title"], "Query String");

        let put = &doc["paths"]["/item/{item_id}"]["put"];
        assert_eq!(put["parameters"][0]["schema"]["maximum"], json!(1000.0));
        let body = &put["requestBody"]["content"]["application/json"]["schema"];
        assert_eq!(body["properties"]["user"]["$ref"], "#/components/schemas/User");
        assert_eq!(body["required"], json!(["user", "importance"]));
        assert_eq!(doc["components"]["schemas"]["User"]["required"], json!(["username"]));
    }
}
