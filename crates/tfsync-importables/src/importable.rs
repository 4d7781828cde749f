//! The interface every resource kind implements

use tfsync_hcl::{Field, ScalarKind, Shape, normalize, replace_special_chars};

use crate::definition::ResourceDefinition;
use crate::kind::ResourceKind;
use crate::{Error, Result};

/// Turns remote objects of one kind into resource definitions.
pub trait Importable {
    fn kind(&self) -> ResourceKind;

    /// Fetch definitions from the remote.
    ///
    /// `None` or an empty id means every resource of the kind. Otherwise exactly
    /// one resource is fetched and a missing one is an error.
    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>>;

    fn hcl_shape(&self) -> Shape {
        self.kind().shape()
    }
}

/// The requested id, with empty input meaning "all".
pub(crate) fn requested(search_id: Option<&str>) -> Option<&str> {
    search_id.map(str::trim).filter(|id| !id.is_empty())
}

pub(crate) fn parse_int_id(kind: ResourceKind, search_id: &str) -> Result<i64> {
    search_id.parse().map_err(|_| Error::InvalidSearchId {
        kind: kind.to_string(),
        search_id: search_id.to_string(),
        expected: "an integer id",
    })
}

pub(crate) fn not_found(kind: ResourceKind, search_id: &str) -> Error {
    Error::NotFound {
        kind: kind.to_string(),
        search_id: search_id.to_string(),
    }
}

/// `normalize(replace_special(name, ""))-<id>`
pub(crate) fn slug_with_id(name: &str, id: impl std::fmt::Display) -> String {
    format!("{}-{}", normalize(&replace_special_chars(name, "")), id)
}

/// `source`, `operator`, `value` condition blocks shared by rule-like shapes.
pub(crate) fn condition_blocks() -> Field {
    Field::blocks(
        "conditions",
        Shape::new(vec![
            Field::string("source"),
            Field::string("operator"),
            Field::string("value"),
        ]),
    )
}

/// Rule-like action blocks, optionally carrying an `expression`.
pub(crate) fn action_blocks(with_expression: bool) -> Field {
    let mut fields = vec![Field::string("action"), Field::list("value", ScalarKind::String)];
    if with_expression {
        fields.push(Field::string("expression"));
    }
    Field::blocks("actions", Shape::new(fields))
}
