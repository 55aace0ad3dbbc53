//! Body models and the seed list.

use serde::{Deserialize, Serialize};

use crate::schema::{Field, Kind, Model};

/// Schema of [`Item`].
pub static ITEM: Model = Model::new("Item", &[
    Field::new("name", Kind::Str),
    Field::new("description", Kind::Str)
        .optional()
        .max_length(300)
        .title("The description"),
    Field::new("price", Kind::Float)
        .gt(0.0)
        .description("The price must be bigger than zero"),
    Field::new("tax", Kind::Float).optional(),
]);

/// Schema of [`User`].
pub static USER: Model = Model::new("User", &[
    Field::new("username", Kind::Str),
    Field::new("full_name", Kind::Str).optional(),
]);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub full_name: Option<String>,
}

/// The models `/model/{model_name}` knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Wire tokens, in declaration order.
    pub const VALUES: &'static [&'static str] = &["alexnet", "resnet", "lenet"];

    pub fn value(self) -> &'static str {
        match self {
            Self::Alexnet => "alexnet",
            Self::Resnet => "resnet",
            Self::Lenet => "lenet",
        }
    }
}

/// Read-only stand-in for a database table.
pub static FAKE_ITEMS_DB: [&str; 5] = ["foo1", "foo2", "foo3", "foo4", "foo5"];
