use serde::{Deserialize, Serialize};

/// A record in the log (append-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(with = "base64_bytes")]
    pub value: Vec<u8>,
    pub offset: u64,
}

/// Request to append a record. Any offset supplied by the caller is ignored.
#[derive(Debug, Deserialize)]
pub struct ProduceRequest {
    #[serde(default, with = "base64_bytes")]
    pub value: Vec<u8>,
}

/// Response for appending a record.
#[derive(Debug, Serialize)]
pub struct ProduceResponse {
    pub offset: u64,
}

/// Request to read the record at an offset.
#[derive(Debug, Deserialize)]
pub struct ConsumeRequest {
    #[serde(default)]
    pub offset: u64,
}

/// Record values travel as standard base64 strings in JSON.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}
