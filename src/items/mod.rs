//! The demo API: one route per parameter-declaration idiom.
//!
//! | Route | Shows |
//! |---|---|
//! | `GET /` | no parameters |
//! | `POST /create/item/{item_id}` | flat model body |
//! | `POST /item/{item_id}` | integer path parameter |
//! | `GET /model/{model_name}` | closed enum path parameter |
//! | `GET /items` | query parameters with defaults |
//! | `GET /user/{user_id}/items/{item_id}` | path + length-bounded optional query |
//! | `GET /ellipsis` | required query parameter |
//! | `GET /list` | aliased, repeated, deprecated query parameter |
//! | `GET /path/item/{item_id}` | aliased query + bounded float |
//! | `PUT /item/{item_id}` | several body parameters merged into one object |
//! | `PUT /item2/{item_id}` | embedded model body |
//! | `GET /openapi.json` | generated API description |

mod handlers;
pub mod models;

use crate::response::Json;
use crate::schema::{Body, BodyParam, Fallback, Kind, Param, Schema};
use crate::validate::Arguments;
use crate::{Method, Router};

use models::{ITEM, ModelName, USER};

pub const TITLE: &str = "sieve items";

/// Builds the full route table.
pub fn router() -> Router {
    let router = routes();
    let doc = router.openapi(TITLE, env!("CARGO_PKG_VERSION"));
    router.on(Method::Get, "/openapi.json", Schema::new(), move |_: Arguments| {
        let doc = doc.clone();
        async move { Json(doc) }
    })
}

fn routes() -> Router {
    let item_body = || BodyParam::new("item", Kind::Model(&ITEM));

    Router::new()
        .on(Method::Get, "/", Schema::new(), handlers::root)
        .on(
            Method::Post,
            "/create/item/{item_id}",
            Schema::new().body(Body::new().param(item_body())),
            handlers::create_item,
        )
        .on(
            Method::Post,
            "/item/{item_id}",
            Schema::new().param(Param::path("item_id", Kind::Int)),
            handlers::read_item,
        )
        .on(
            Method::Get,
            "/model/{model_name}",
            Schema::new().param(Param::path("model_name", Kind::Choice(ModelName::VALUES))),
            handlers::get_model,
        )
        .on(
            Method::Get,
            "/items",
            Schema::new()
                .param(Param::query("skip", Kind::Int).default(Fallback::Int(0)))
                .param(Param::query("limit", Kind::Int).default(Fallback::Int(10))),
            handlers::list_items,
        )
        .on(
            Method::Get,
            "/user/{user_id}/items/{item_id}",
            Schema::new()
                .param(Param::path("user_id", Kind::Int))
                .param(Param::path("item_id", Kind::Str))
                .param(Param::query("q", Kind::Str).optional().min_length(3).max_length(50))
                .param(Param::query("short", Kind::Bool).default(Fallback::Bool(false))),
            handlers::read_user_item,
        )
        .on(
            Method::Get,
            "/ellipsis",
            Schema::new().param(Param::query("q", Kind::Str).max_length(3)),
            handlers::ellipsis,
        )
        .on(
            Method::Get,
            "/list",
            Schema::new().param(
                Param::query("q", Kind::StrList)
                    .optional()
                    .alias("item-query")
                    .title("Query String")
                    .description("Repeat the key to pass several values")
                    .deprecated(),
            ),
            handlers::list_queries,
        )
        .on(
            Method::Get,
            "/path/item/{item_id}",
            Schema::new()
                .param(Param::path("item_id", Kind::Int).title("The ID of the item to get"))
                .param(Param::query("q", Kind::Str).optional().alias("item_query"))
                .param(Param::query("size", Kind::Float).gt(0.0).lt(10.5)),
            handlers::path_item,
        )
        .on(
            Method::Put,
            "/item/{item_id}",
            Schema::new()
                .param(Param::path("item_id", Kind::Int).ge(0.0).le(1000.0).title("The ID of the item"))
                .param(Param::query("q", Kind::Str).optional())
                .body(Body::new()
                    .param(item_body())
                    .param(BodyParam::new("user", Kind::Model(&USER)))
                    .param(BodyParam::new("importance", Kind::Int))),
            handlers::update_item,
        )
        .on(
            Method::Put,
            "/item2/{item_id}",
            Schema::new()
                .param(Param::path("item_id", Kind::Int))
                .body(Body::new().param(item_body().embed())),
            handlers::update_item_embedded,
        )
}
