//! Rendering a state snapshot as configuration text
//!
//! Each instance's attributes are projected through the shape of its resource
//! type into a [`Record`], then emitted inside a `resource` block. Attributes
//! outside the shape are dropped and values that cannot be coerced to the
//! declared type are treated as absent.

use serde_json::{Map, Value as JsonValue};
use tfsync_hcl::{FieldKind, Record, Scalar, ScalarKind, Shape, ShapeRegistry, Value, emit};

use crate::declare::{aliased_provider_block, required_providers_block};
use crate::state::{ProviderRef, Snapshot};
use crate::{Error, Result};

/// Render every managed resource in `snapshot`.
///
/// Output starts with one preamble declaring each distinct provider and one
/// `provider` block per distinct alias, followed by one `resource` block per
/// instance. An unknown resource type or an invalid
/// provider reference fails the whole render.
pub fn adapt(snapshot: &Snapshot, shapes: &dyn ShapeRegistry) -> Result<String> {
    let mut sources: Vec<String> = Vec::new();
    // (local name, alias) pairs, legacy references included.
    let mut aliases: Vec<(String, String)> = Vec::new();
    let mut body = String::new();

    for resource in snapshot.managed() {
        let address = resource.address();
        let shape = shapes
            .shape_for(&resource.resource_type)
            .ok_or_else(|| Error::UnknownResourceType {
                address: address.clone(),
                resource_type: resource.resource_type.clone(),
            })?;
        let provider = resource.provider_ref()?;

        let aliased = match &provider {
            ProviderRef::Qualified { source, alias } => {
                if !sources.contains(source) {
                    sources.push(source.clone());
                }
                alias.as_ref()
            }
            ProviderRef::Legacy { alias } => Some(alias),
        };
        if let Some(alias) = aliased {
            let pair = (provider.local_name().to_string(), alias.clone());
            if !aliases.contains(&pair) {
                aliases.push(pair);
            }
        }

        for instance in &resource.instances {
            let record = project(&instance.attributes, &shape, &address);
            body.push_str(&format!(
                "resource {} {} {{\n\tprovider = {provider}\n{}}}\n\n",
                resource.resource_type,
                resource.name,
                emit(&record, 1)
            ));
        }
        tracing::debug!(%address, instances = resource.instances.len(), "Rendered resource");
    }

    let mut out = required_providers_block(sources.iter().map(String::as_str));
    for (local_name, alias) in &aliases {
        out.push_str(&aliased_provider_block(local_name, alias));
    }
    out.push_str(&body);
    Ok(out)
}

/// Project one attribute object through `shape`.
pub fn project(attributes: &Map<String, JsonValue>, shape: &Shape, address: &str) -> Record {
    let mut record = Record::new();
    for field in shape.fields() {
        let Some(raw) = attributes.get(field.source()) else {
            continue;
        };
        if raw.is_null() {
            continue;
        }

        let value = match field.kind() {
            FieldKind::Scalar(kind) => coerce_scalar(raw, *kind).map(Value::Scalar),
            FieldKind::List(kind) => raw.as_array().map(|items| {
                Value::List(
                    items
                        .iter()
                        .filter_map(|item| coerce_scalar(item, *kind))
                        .collect(),
                )
            }),
            FieldKind::Blocks(inner) => objects(raw).map(|elements| {
                Value::Blocks(
                    elements
                        .into_iter()
                        .map(|element| project(element, inner, address))
                        .collect(),
                )
            }),
            FieldKind::Nested(inner, nesting) => single_object(raw)
                .map(|object| Value::Nested(project(object, inner, address), *nesting)),
            FieldKind::Map(nesting) => raw.as_object().map(|object| {
                Value::Map(
                    object
                        .iter()
                        .filter_map(|(key, value)| {
                            loose_scalar(value).map(|scalar| (key.clone(), scalar))
                        })
                        .collect(),
                    *nesting,
                )
            }),
        };

        match value {
            Some(value) => record.push(field.name(), value),
            // Unset nested blocks are recorded as empty lists.
            None if raw.as_array().is_some_and(Vec::is_empty) => {}
            None => tracing::warn!(
                %address,
                field = field.source(),
                value = %raw,
                "Dropped attribute that does not match its declared type"
            ),
        }
    }
    record
}

/// A list of objects; a lone object counts as a one-element list.
fn objects(raw: &JsonValue) -> Option<Vec<&Map<String, JsonValue>>> {
    match raw {
        JsonValue::Array(items) => Some(items.iter().filter_map(JsonValue::as_object).collect()),
        JsonValue::Object(object) => Some(vec![object]),
        _ => None,
    }
}

/// A single object; a one-element list of an object is accepted too.
fn single_object(raw: &JsonValue) -> Option<&Map<String, JsonValue>> {
    match raw {
        JsonValue::Object(object) => Some(object),
        JsonValue::Array(items) if items.len() == 1 => items[0].as_object(),
        _ => None,
    }
}

fn coerce_scalar(raw: &JsonValue, kind: ScalarKind) -> Option<Scalar> {
    match (kind, raw) {
        (ScalarKind::String, JsonValue::String(s)) => Some(Scalar::String(s.clone())),
        (ScalarKind::String, JsonValue::Number(n)) => Some(Scalar::String(n.to_string())),
        (ScalarKind::String, JsonValue::Bool(b)) => Some(Scalar::String(b.to_string())),

        (ScalarKind::Integer, JsonValue::Number(n)) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(Scalar::Integer),
        (ScalarKind::Integer, JsonValue::String(s)) => s.trim().parse().ok().map(Scalar::Integer),

        (ScalarKind::Float, JsonValue::Number(n)) => n.as_f64().map(Scalar::Float),
        (ScalarKind::Float, JsonValue::String(s)) => s.trim().parse().ok().map(Scalar::Float),

        (ScalarKind::Bool, JsonValue::Bool(b)) => Some(Scalar::Bool(*b)),
        (ScalarKind::Bool, JsonValue::String(s)) => match s.as_str() {
            "true" => Some(Scalar::Bool(true)),
            "false" => Some(Scalar::Bool(false)),
            _ => None,
        },

        _ => None,
    }
}

/// Free-form map values keep their JSON type.
fn loose_scalar(raw: &JsonValue) -> Option<Scalar> {
    match raw {
        JsonValue::String(s) => Some(Scalar::String(s.clone())),
        JsonValue::Bool(b) => Some(Scalar::Bool(*b)),
        JsonValue::Number(n) => n
            .as_i64()
            .map(Scalar::Integer)
            .or_else(|| n.as_f64().map(Scalar::Float)),
        _ => None,
    }
}
