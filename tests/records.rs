#[cfg(test)]
mod tests {
    use serde_json::json;
    use tsync::libs::task::{is_completed, RecordError, TaskRecord};

    #[test]
    fn test_record_conversion() {
        let record = json!({"userId": 1, "id": 2, "title": "X", "completed": true});
        let task = TaskRecord::try_from(&record).unwrap();

        assert_eq!(task.id, 2);
        assert_eq!(task.owner_id, 1);
        assert_eq!(task.title, "X");
        assert!(task.completed);
    }

    #[test]
    fn test_record_conversion_missing_fields() {
        let record = json!({"userId": 1, "title": "X", "completed": true});
        assert_eq!(TaskRecord::try_from(&record), Err(RecordError::MissingField("id")));

        let record = json!({"id": 2, "title": "X", "completed": true});
        assert_eq!(TaskRecord::try_from(&record), Err(RecordError::MissingField("userId")));

        let record = json!({"userId": 1, "id": 2, "completed": true});
        assert_eq!(TaskRecord::try_from(&record), Err(RecordError::MissingField("title")));
    }

    #[test]
    fn test_record_conversion_wrong_types() {
        let record = json!({"userId": 1, "id": "2", "title": "X", "completed": true});
        assert_eq!(TaskRecord::try_from(&record), Err(RecordError::InvalidType("id")));

        let record = json!({"userId": 1, "id": 2, "title": 7, "completed": true});
        assert_eq!(TaskRecord::try_from(&record), Err(RecordError::InvalidType("title")));
    }

    #[test]
    fn test_completed_truthiness() {
        assert!(is_completed(&json!({"completed": true})).unwrap());
        assert!(!is_completed(&json!({"completed": false})).unwrap());
        assert!(!is_completed(&json!({"completed": null})).unwrap());
        // Non-boolean values are not truthy
        assert!(!is_completed(&json!({"completed": "yes"})).unwrap());
        assert!(!is_completed(&json!({"completed": 1})).unwrap());
    }

    #[test]
    fn test_completed_missing_key_faults() {
        assert_eq!(is_completed(&json!({"id": 1})), Err(RecordError::MissingField("completed")));
        // Array elements that are not objects have no keys at all
        assert_eq!(is_completed(&json!("just a string")), Err(RecordError::MissingField("completed")));
    }

    #[test]
    fn test_empty_title_is_allowed() {
        let record = json!({"userId": 3, "id": 4, "title": "", "completed": true});
        let task = TaskRecord::try_from(&record).unwrap();
        assert_eq!(task.title, "");
    }
}
