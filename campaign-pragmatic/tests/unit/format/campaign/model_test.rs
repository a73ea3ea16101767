use super::*;
use std::io::BufReader;

#[test]
fn can_deserialize_campaign_with_optional_lists() {
    let json = r#"{
      "actions": [
        { "id": "1", "startTime": "2016-04-01T09:00:00Z", "endTime": "2016-04-01T10:00:00Z",
          "activity": { "id": "a1", "title": "Canvassing" }, "location": { "id": "l1" } }
      ]
    }"#;

    let campaign = deserialize_campaign(BufReader::new(json.as_bytes())).expect("cannot deserialize campaign");

    assert_eq!(campaign.actions.len(), 1);
    assert_eq!(campaign.actions[0].activity.title.as_deref(), Some("Canvassing"));
    assert_eq!(campaign.actions[0].location.title, None);
    assert!(campaign.user_actions.is_empty());
    assert!(campaign.responses.is_empty());
}

#[test]
fn can_return_error_on_missing_fields() {
    let json = r#"{ "actions": [ { "id": "1", "startTime": "2016-04-01T09:00:00Z" } ] }"#;

    let result = deserialize_campaign(BufReader::new(json.as_bytes()));

    let err = result.err().expect("expect error");
    assert_eq!(err.codes(), vec!["E0000"]);
    assert!(err.errors[0].action.contains("endTime"));
}

