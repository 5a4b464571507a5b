//! Serialization and deserialization implementations for DeadlineList
//!
//! The data file holds only the `[[deadlines]]` array of records. Session
//! ids and the id counter are in-memory bookkeeping: they are omitted on
//! serialize and rebuilt here on deserialize.

use super::deadline_list::DeadlineList;
use super::record::DeadlineRecord;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Default, Deserialize)]
#[serde(default)]
struct DeadlineListHelper {
    deadlines: Vec<DeadlineRecord>,
}

impl<'de> Deserialize<'de> for DeadlineList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = DeadlineListHelper::deserialize(deserializer)?;
        let mut records = helper.deadlines;

        // Reassign session ids in list order, 1..=n
        let mut id_counter = 0;
        for record in &mut records {
            id_counter += 1;
            record.id = id_counter;
        }

        Ok(DeadlineList {
            records,
            id_counter,
        })
    }
}

impl Serialize for DeadlineList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DeadlineList", 1)?;
        state.serialize_field("deadlines", &self.records)?;
        state.end()
    }
}
