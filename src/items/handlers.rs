//! Endpoint bodies. Each one only sees validated [`Arguments`].

use serde_json::{Map, Value, json};

use crate::error::Error;
use crate::response::Json;
use crate::validate::Arguments;

use super::models::{FAKE_ITEMS_DB, Item, ModelName, User};

type Reply = Result<Json<Value>, Error>;

/// `GET /`
pub async fn root(_args: Arguments) -> Json<Value> {
    Json(json!({ "massage": "hello world" }))
}

/// `POST /create/item/{item_id}`
pub async fn create_item(args: Arguments) -> Reply {
    let item: Item = args.get("item")?;
    let mut out = to_object(&item)?;
    // A tax of exactly zero counts as no tax.
    if let Some(tax) = item.tax.filter(|t| *t != 0.0) {
        out.insert("price_with_tax".to_owned(), json!(item.price + tax));
    }
    Ok(Json(Value::Object(out)))
}

/// `POST /item/{item_id}`
pub async fn read_item(args: Arguments) -> Reply {
    let item_id: i64 = args.get("item_id")?;
    Ok(Json(json!({ "item_id": item_id })))
}

/// `GET /model/{model_name}`
pub async fn get_model(args: Arguments) -> Reply {
    let model_name: ModelName = args.get("model_name")?;
    let message = if model_name == ModelName::Alexnet {
        "FTW"
    } else if model_name.value() == "lanet" {
        // Never matches: the token is spelled "lenet".
        "image"
    } else {
        "residuals"
    };
    Ok(Json(json!({ "model_name": model_name, "message": message })))
}

/// `GET /items?skip=&limit=`
pub async fn list_items(args: Arguments) -> Reply {
    let skip: i64 = args.get("skip")?;
    let limit: i64 = args.get("limit")?;
    let (start, stop) = slice_bounds(FAKE_ITEMS_DB.len(), skip, skip.saturating_add(limit));
    let items: Vec<Value> = FAKE_ITEMS_DB
        .get(start..stop)
        .unwrap_or_default()
        .iter()
        .map(|name| json!({ "item_name": name }))
        .collect();
    Ok(Json(Value::Array(items)))
}

/// `GET /user/{user_id}/items/{item_id}?q=&short=`
pub async fn read_user_item(args: Arguments) -> Reply {
    let user_id: i64 = args.get("user_id")?;
    let item_id: String = args.get("item_id")?;
    let q: Option<String> = args.get("q")?;
    let short: bool = args.get("short")?;

    let mut out = Map::new();
    out.insert("user_id".to_owned(), json!(user_id));
    out.insert("item_id".to_owned(), json!(item_id));
    if let Some(q) = non_empty(q) {
        out.insert("q".to_owned(), json!(q));
    }
    if !short {
        out.insert("description".to_owned(), json!("long long long description"));
    }
    Ok(Json(Value::Object(out)))
}

/// `GET /ellipsis?q=`
pub async fn ellipsis(args: Arguments) -> Reply {
    let q: String = args.get("q")?;
    let mut out = placeholder_items();
    if let Some(q) = non_empty(Some(q)) {
        out.insert("q".to_owned(), json!(q));
    }
    Ok(Json(Value::Object(out)))
}

/// `GET /list?item-query=`
pub async fn list_queries(args: Arguments) -> Reply {
    let q: Option<Vec<String>> = args.get("q")?;
    let mut out = placeholder_items();
    out.insert("q".to_owned(), json!(q));
    Ok(Json(Value::Object(out)))
}

/// `GET /path/item/{item_id}?item_query=&size=`
pub async fn path_item(args: Arguments) -> Reply {
    let item_id: i64 = args.get("item_id")?;
    let q: Option<String> = args.get("q")?;
    let size: f64 = args.get("size")?;

    let mut out = Map::new();
    out.insert("item_id".to_owned(), json!(item_id));
    out.insert("size".to_owned(), json!(size));
    if let Some(q) = non_empty(q) {
        out.insert("q".to_owned(), json!(q));
    }
    Ok(Json(Value::Object(out)))
}

/// `PUT /item/{item_id}`
pub async fn update_item(args: Arguments) -> Reply {
    let item_id: i64 = args.get("item_id")?;
    let q: Option<String> = args.get("q")?;
    let item: Item = args.get("item")?;
    let user: User = args.get("user")?;
    let importance: i64 = args.get("importance")?;

    let mut out = Map::new();
    out.insert("item_id".to_owned(), json!(item_id));
    out.insert("user".to_owned(), json!(user));
    out.insert("importance".to_owned(), json!(importance));
    if let Some(q) = non_empty(q) {
        out.insert("q".to_owned(), json!(q));
    }
    out.insert("item".to_owned(), json!(item));
    Ok(Json(Value::Object(out)))
}

/// `PUT /item2/{item_id}`
pub async fn update_item_embedded(args: Arguments) -> Reply {
    let item_id: i64 = args.get("item_id")?;
    let item: Item = args.get("item")?;
    Ok(Json(json!({ "item_id": item_id, "item": item })))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Sequence-slice bounds for `[start, stop)` over `len` elements: negative
/// indices count from the end, anything out of range clamps.
pub(crate) fn slice_bounds(len: usize, start: i64, stop: i64) -> (usize, usize) {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let clamp = |i: i64| {
        let i = if i < 0 { i.saturating_add(len) } else { i };
        usize::try_from(i.clamp(0, len)).unwrap_or(0)
    };
    let (start, stop) = (clamp(start), clamp(stop));
    (start, stop.max(start))
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}

fn placeholder_items() -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("items".to_owned(), json!([{ "user_id": "foo", "item_id": "foo" }]));
    out
}

fn to_object(item: &Item) -> Result<Map<String, Value>, Error> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Ok(Map::new()),
        Err(source) => Err(Error::Argument { name: "item".to_owned(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_bounds_follow_sequence_slicing() {
        assert_eq!(slice_bounds(5, 2, 4), (2, 4));
        assert_eq!(slice_bounds(5, 0, 10), (0, 5));
        assert_eq!(slice_bounds(5, 7, 17), (5, 5));
        assert_eq!(slice_bounds(5, -2, 8), (3, 5));
        assert_eq!(slice_bounds(5, 3, 1), (3, 3));
        assert_eq!(slice_bounds(5, 0, -1), (0, 4));
    }
}
