//! OneLogin app rules
//!
//! Rules belong to an app, so a single rule is addressed as `<app_id>/<id>`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tfsync_hcl::{Field, Shape};

use crate::definition::ResourceDefinition;
use crate::importable::{
    Importable, action_blocks, condition_blocks, not_found, requested, slug_with_id,
};
use crate::kind::ResourceKind;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRule {
    pub id: i64,
    pub app_id: i64,
    pub name: String,
}

pub trait AppRuleQuerier {
    fn query(&self) -> Result<Vec<AppRule>>;
    fn get_one(&self, app_id: i64, id: i64) -> Result<Option<AppRule>>;
}

pub struct OneloginAppRulesImportable {
    service: Arc<dyn AppRuleQuerier>,
}

impl OneloginAppRulesImportable {
    pub fn new(service: Arc<dyn AppRuleQuerier>) -> Self {
        Self { service }
    }
}

/// Parse `<app_id>/<id>`.
fn parse_rule_id(search_id: &str) -> Result<(i64, i64)> {
    let invalid = || Error::InvalidSearchId {
        kind: ResourceKind::OneloginAppRules.to_string(),
        search_id: search_id.to_string(),
        expected: "<app_id>/<id>",
    };
    let (app_id, id) = search_id.split_once('/').ok_or_else(invalid)?;
    let app_id = app_id.trim().parse().map_err(|_| invalid())?;
    let id = id.trim().parse().map_err(|_| invalid())?;
    Ok((app_id, id))
}

impl Importable for OneloginAppRulesImportable {
    fn kind(&self) -> ResourceKind {
        ResourceKind::OneloginAppRules
    }

    fn import_from_remote(&self, search_id: Option<&str>) -> Result<Vec<ResourceDefinition>> {
        let kind = self.kind();
        let rules = match requested(search_id) {
            None => {
                tracing::info!(%kind, "Collecting app rules from remote");
                self.service.query()?
            }
            Some(search_id) => {
                let (app_id, id) = parse_rule_id(search_id)?;
                tracing::info!(%kind, app_id, id, "Collecting app rule from remote");
                let rule = self
                    .service
                    .get_one(app_id, id)?
                    .ok_or_else(|| not_found(kind, search_id))?;
                vec![rule]
            }
        };

        Ok(rules
            .iter()
            .map(|rule| {
                ResourceDefinition::new(
                    kind,
                    slug_with_id(&rule.name, rule.id),
                    format!("{}/{}", rule.app_id, rule.id),
                )
            })
            .collect())
    }
}

pub fn app_rule_shape() -> Shape {
    Shape::new(vec![
        Field::integer("app_id"),
        Field::string("name"),
        Field::string("match"),
        Field::integer("position"),
        Field::boolean("enabled"),
        condition_blocks(),
        action_blocks(true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_app_scoped_id() {
        assert_eq!(parse_rule_id("12/345").unwrap(), (12, 345));
    }

    #[rstest]
    #[case("345")]
    #[case("12/")]
    #[case("a/1")]
    #[case("1/2/3")]
    fn rejects_malformed_ids(#[case] input: &str) {
        assert!(matches!(
            parse_rule_id(input),
            Err(Error::InvalidSearchId { expected: "<app_id>/<id>", .. })
        ));
    }
}
