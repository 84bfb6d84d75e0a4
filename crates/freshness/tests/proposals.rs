//! End-to-end tests: YAML rule in, catalog wire JSON out.

use cadence_freshness::{lint::lint, FreshnessAssertion};
use serde_json::json;

const ASSERTION_URN: &str = "urn:li:assertion:freshness-orders";
const ENTITY_URN: &str = "urn:li:dataset:(urn:li:dataPlatform:hive,orders,PROD)";

const NIGHTLY_CRON: &str = r#"
type: cron
cron: "0 0 * * *"
timezone: UTC
description: orders must be reloaded nightly
"#;

const NINETY_MINUTES: &str = r#"
type: interval
interval: 1h30m
"#;

#[test]
fn cron_rule_to_wire_json() {
    let rule = FreshnessAssertion::from_yaml_str(NIGHTLY_CRON).unwrap();
    assert!(lint(&rule).is_empty());

    let proposals = rule.generate_mcp(ASSERTION_URN, ENTITY_URN).unwrap();
    assert_eq!(proposals.len(), 1);
    assert_eq!(
        serde_json::to_value(&proposals[0]).unwrap(),
        json!({
            "entityUrn": ASSERTION_URN,
            "changeType": "UPSERT",
            "aspectName": "assertionInfo",
            "aspect": {
                "type": "FRESHNESS",
                "freshnessAssertion": {
                    "type": "DATASET_CHANGE",
                    "entity": ENTITY_URN,
                    "schedule": {
                        "type": "CRON",
                        "cron": {"cron": "0 0 * * *", "timezone": "UTC"}
                    }
                },
                "description": "orders must be reloaded nightly"
            }
        })
    );
}

#[test]
fn interval_rule_to_wire_json() {
    let rule = FreshnessAssertion::from_yaml_str(NINETY_MINUTES).unwrap();
    assert!(lint(&rule).is_empty());

    let proposals = rule.generate_mcp(ASSERTION_URN, ENTITY_URN).unwrap();
    assert_eq!(proposals.len(), 1);
    assert_eq!(
        serde_json::to_value(&proposals[0]).unwrap(),
        json!({
            "entityUrn": ASSERTION_URN,
            "changeType": "UPSERT",
            "aspectName": "assertionInfo",
            "aspect": {
                "type": "FRESHNESS",
                "freshnessAssertion": {
                    "type": "DATASET_CHANGE",
                    "entity": ENTITY_URN,
                    "schedule": {
                        "type": "FIXED_INTERVAL",
                        "fixedInterval": {"unit": "SECOND", "multiple": 5400}
                    }
                }
            }
        })
    );
}

#[test]
fn json_config_matches_yaml_config() {
    let from_yaml = FreshnessAssertion::from_yaml_str(NINETY_MINUTES).unwrap();
    let from_json = FreshnessAssertion::from_json_value(json!({
        "type": "interval",
        "interval": "1h30m"
    }))
    .unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn rejected_configs() {
    for yaml in [
        "type: weekly\n",
        "type: interval\n",
        "type: cron\n",
        "interval: 1h\n",
    ] {
        assert!(
            FreshnessAssertion::from_yaml_str(yaml).is_err(),
            "expected rejection: {yaml}"
        );
    }
}
