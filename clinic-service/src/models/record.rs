use mongodb::bson::Bson;

/// One stored document: an open mapping from field name to BSON value.
/// The service imposes no schema beyond the store-assigned `_id`.
pub type Record = mongodb::bson::Document;

/// Render a record for the HTTP response. The top-level `_id` is emitted as
/// its 24-character hex string rather than extended-JSON `{"$oid": ...}`;
/// every other field goes through relaxed extended JSON untouched.
pub fn into_json(mut record: Record) -> serde_json::Value {
    if let Ok(oid) = record.get_object_id("_id") {
        record.insert("_id", oid.to_hex());
    }
    Bson::Document(record).into_relaxed_extjson()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn renders_id_as_hex_string() {
        let oid = ObjectId::new();
        let json = into_json(doc! { "_id": oid, "name": "Jane" });

        assert_eq!(json["_id"], serde_json::json!(oid.to_hex()));
        assert_eq!(json["name"], serde_json::json!("Jane"));
    }

    #[test]
    fn leaves_records_without_id_untouched() {
        let json = into_json(doc! { "name": "Jane", "age": 30_i64 });

        assert_eq!(json, serde_json::json!({ "name": "Jane", "age": 30 }));
    }

    #[test]
    fn nested_fields_survive_rendering() {
        let json = into_json(doc! {
            "name": "Jane",
            "contact": { "phone": "555-0100", "emergency": ["Joe"] },
        });

        assert_eq!(json["contact"]["phone"], serde_json::json!("555-0100"));
        assert_eq!(json["contact"]["emergency"][0], serde_json::json!("Joe"));
    }
}
