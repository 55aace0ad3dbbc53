//! Declarative parameter and body schemas.
//!
//! A route declares what it accepts as a [`Schema`]: an ordered list of
//! path/query [`Param`]s and an optional [`Body`]. Body payloads are
//! described by static [`Model`]s whose [`Field`]s may nest further models.
//!
//! Everything here is plain data, built once at startup and consumed by the
//! shared validation routine.
//!
//! ```rust
//! use sieve::{Body, BodyParam, Field, Kind, Model, Param, Schema};
//!
//! static ITEM: Model = Model::new("Item", &[
//!     Field::new("name", Kind::Str),
//!     Field::new("price", Kind::Float).gt(0.0),
//!     Field::new("tax", Kind::Float).optional(),
//! ]);
//!
//! let schema = Schema::new()
//!     .param(Param::path("item_id", Kind::Int).ge(0.0).le(1000.0))
//!     .param(Param::query("q", Kind::Str).optional().max_length(50))
//!     .body(Body::new().param(BodyParam::new("item", Kind::Model(&ITEM)).embed()));
//! ```

use serde_json::Value;

// ── Kind ──────────────────────────────────────────────────────────────────────

/// The declared type of a parameter or field.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    Int,
    Float,
    Str,
    Bool,
    /// Every occurrence of a repeated query key, in request order.
    StrList,
    /// A closed set of string tokens.
    Choice(&'static [&'static str]),
    /// A nested structured object.
    Model(&'static Model),
}

impl Kind {
    pub(crate) fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

// ── Fallback ──────────────────────────────────────────────────────────────────

/// What an absent value turns into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fallback {
    /// No fallback: absence is a `missing` error.
    Required,
    /// The "no value" marker, serialized as `null`. Distinct from `""`, `0`
    /// and `false`. Fields falling back to `Null` also accept an explicit `null`.
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(&'static str),
}

impl Fallback {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }

    /// The substituted value, or `None` for [`Fallback::Required`].
    pub(crate) fn value(self) -> Option<Value> {
        match self {
            Self::Required => None,
            Self::Null => Some(Value::Null),
            Self::Int(i) => Some(Value::from(i)),
            Self::Float(f) => Some(Value::from(f)),
            Self::Bool(b) => Some(Value::Bool(b)),
            Self::Str(s) => Some(Value::from(s)),
        }
    }
}

// ── Constraints ───────────────────────────────────────────────────────────────

/// Numeric bounds and string length bounds. All optional.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub gt: Option<f64>,
    pub ge: Option<f64>,
    pub lt: Option<f64>,
    pub le: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Constraints {
    pub const NONE: Self = Self {
        gt: None,
        ge: None,
        lt: None,
        le: None,
        min_length: None,
        max_length: None,
    };
}

// ── Shared builder methods ────────────────────────────────────────────────────

/// Generates the `const fn` constraint/default setters shared by [`Param`],
/// [`Field`] and [`BodyParam`].
macro_rules! rule_setters {
    () => {
        /// Absent values become `null` instead of a `missing` error.
        pub const fn optional(mut self) -> Self {
            self.default = Fallback::Null;
            self
        }

        /// Absent values become `default`.
        pub const fn default(mut self, default: Fallback) -> Self {
            self.default = default;
            self
        }

        /// Exclusive lower bound.
        pub const fn gt(mut self, bound: f64) -> Self {
            self.constraints.gt = Some(bound);
            self
        }

        /// Inclusive lower bound.
        pub const fn ge(mut self, bound: f64) -> Self {
            self.constraints.ge = Some(bound);
            self
        }

        /// Exclusive upper bound.
        pub const fn lt(mut self, bound: f64) -> Self {
            self.constraints.lt = Some(bound);
            self
        }

        /// Inclusive upper bound.
        pub const fn le(mut self, bound: f64) -> Self {
            self.constraints.le = Some(bound);
            self
        }

        pub const fn min_length(mut self, len: usize) -> Self {
            self.constraints.min_length = Some(len);
            self
        }

        pub const fn max_length(mut self, len: usize) -> Self {
            self.constraints.max_length = Some(len);
            self
        }
    };
}

// ── Param ─────────────────────────────────────────────────────────────────────

/// Where a parameter is read from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
    Path,
    Query,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Query => "query",
        }
    }
}

/// A declared path or query parameter.
#[derive(Clone, Copy, Debug)]
pub struct Param {
    pub name: &'static str,
    /// Wire name when it differs from `name` (e.g. `item-query`).
    pub alias: Option<&'static str>,
    pub source: Source,
    pub kind: Kind,
    pub default: Fallback,
    pub constraints: Constraints,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Documentation only; a deprecated parameter validates as usual.
    pub deprecated: bool,
}

impl Param {
    /// A path parameter. Always required.
    pub const fn path(name: &'static str, kind: Kind) -> Self {
        Self::new(name, Source::Path, kind)
    }

    /// A query parameter. Required until [`optional`](Self::optional) or
    /// [`default`](Self::default) says otherwise.
    pub const fn query(name: &'static str, kind: Kind) -> Self {
        Self::new(name, Source::Query, kind)
    }

    const fn new(name: &'static str, source: Source, kind: Kind) -> Self {
        Self {
            name,
            alias: None,
            source,
            kind,
            default: Fallback::Required,
            constraints: Constraints::NONE,
            title: None,
            description: None,
            deprecated: false,
        }
    }

    rule_setters!();

    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub const fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// The key looked up in the request.
    pub fn wire_name(&self) -> &'static str {
        self.alias.unwrap_or(self.name)
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// A named structured payload.
#[derive(Debug)]
pub struct Model {
    pub name: &'static str,
    pub fields: &'static [Field],
}

impl Model {
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }
}

/// One field of a [`Model`].
#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub default: Fallback,
    pub constraints: Constraints,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl Field {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            default: Fallback::Required,
            constraints: Constraints::NONE,
            title: None,
            description: None,
        }
    }

    rule_setters!();

    pub const fn title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

/// One body-sourced parameter.
#[derive(Clone, Copy, Debug)]
pub struct BodyParam {
    pub name: &'static str,
    pub kind: Kind,
    pub default: Fallback,
    pub constraints: Constraints,
    pub embed: bool,
}

impl BodyParam {
    pub const fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            default: Fallback::Required,
            constraints: Constraints::NONE,
            embed: false,
        }
    }

    rule_setters!();

    /// Expect the payload wrapped one level under `name`.
    pub const fn embed(mut self) -> Self {
        self.embed = true;
        self
    }
}

/// The request body of a route.
#[derive(Clone, Debug)]
pub struct Body {
    pub params: Vec<BodyParam>,
}

impl Body {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    pub fn param(mut self, param: BodyParam) -> Self {
        self.params.push(param);
        self
    }

    /// Several body parameters are always merged into one object keyed by
    /// parameter name; a single one only when it asks to be embedded.
    pub fn is_embedded(&self) -> bool {
        match self.params.as_slice() {
            [single] => single.embed,
            _ => true,
        }
    }
}

impl Default for Body {
    fn default() -> Self { Self::new() }
}

// ── Schema ────────────────────────────────────────────────────────────────────

/// Everything a route accepts.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    pub params: Vec<Param>,
    pub body: Option<Body>,
}

impl Schema {
    pub fn new() -> Self {
        Self { params: Vec::new(), body: None }
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_body_param_is_flat_unless_embedded() {
        let flat = Body::new().param(BodyParam::new("item", Kind::Str));
        assert!(!flat.is_embedded());

        let embedded = Body::new().param(BodyParam::new("item", Kind::Str).embed());
        assert!(embedded.is_embedded());

        let merged = Body::new()
            .param(BodyParam::new("item", Kind::Str))
            .param(BodyParam::new("importance", Kind::Int));
        assert!(merged.is_embedded());
    }

    #[test]
    fn alias_overrides_wire_name() {
        let q = Param::query("q", Kind::StrList).alias("item-query").deprecated();
        assert_eq!(q.wire_name(), "item-query");
        assert!(q.default.is_required());
        assert!(q.deprecated);
        assert_eq!(Param::query("q", Kind::Str).optional().default, Fallback::Null);
    }
}
