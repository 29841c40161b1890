// src/data_input/log_data.rs

use serde::de::{DeserializeOwned, Error as DeError};
use serde::{Deserialize, Deserializer};

use crate::channel_names::{MULTI_CHANNEL_NAMES, SINGLE_CHANNEL_NAMES};
use crate::constants::MISSING_VALUE_SENTINEL;

/// One channel reading: either a real number or the device's "unavailable" marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    Present(f64),
    Missing,
}

impl SampleValue {
    pub fn value(self) -> Option<f64> {
        match self {
            SampleValue::Present(v) => Some(v),
            SampleValue::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, SampleValue::Missing)
    }
}

// The device clients quote every value, so numbers arrive either bare or as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for SampleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match RawValue::deserialize(deserializer)? {
            RawValue::Number(v) => v,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed == MISSING_VALUE_SENTINEL {
                    return Ok(SampleValue::Missing);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| D::Error::custom(format!("invalid channel value '{text}'")))?
            }
        };
        if !parsed.is_finite() {
            return Err(D::Error::custom(format!("non-finite channel value {parsed}")));
        }
        Ok(SampleValue::Present(parsed))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Integer(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Integer(ms) => Ok(ms),
        RawTimestamp::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("invalid timestamp '{text}'"))),
    }
}

/// A decoded log line: timestamp in milliseconds plus one value per channel,
/// ordered as the layout's channel names.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64,
    pub values: Vec<SampleValue>,
}

/// Record schema of a log file.
pub trait ChannelRecord: DeserializeOwned {
    const CHANNEL_NAMES: &'static [&'static str];

    fn into_sample(self) -> Sample;
}

/// `{"timestamp": 1727600000000, "data": "0.52"}` as written by the single-port logger.
#[derive(Debug, Deserialize)]
pub struct SingleChannelRecord {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
    pub data: SampleValue,
}

impl ChannelRecord for SingleChannelRecord {
    const CHANNEL_NAMES: &'static [&'static str] = &SINGLE_CHANNEL_NAMES;

    fn into_sample(self) -> Sample {
        Sample {
            timestamp_ms: self.timestamp,
            values: vec![self.data],
        }
    }
}

/// `{"timestamp": ..., "out1": "1.0", "out2": "--", "out3": "5"}` as written by the clients.
#[derive(Debug, Deserialize)]
pub struct MultiChannelRecord {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
    pub out1: SampleValue,
    pub out2: SampleValue,
    pub out3: SampleValue,
}

impl ChannelRecord for MultiChannelRecord {
    const CHANNEL_NAMES: &'static [&'static str] = &MULTI_CHANNEL_NAMES;

    fn into_sample(self) -> Sample {
        Sample {
            timestamp_ms: self.timestamp,
            values: vec![self.out1, self.out2, self.out3],
        }
    }
}

/// Which record schema a log is decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLayout {
    SingleChannel,
    MultiChannel,
}

impl LogLayout {
    pub fn channel_names(self) -> &'static [&'static str] {
        match self {
            LogLayout::SingleChannel => SingleChannelRecord::CHANNEL_NAMES,
            LogLayout::MultiChannel => MultiChannelRecord::CHANNEL_NAMES,
        }
    }

    /// Decodes one raw line into a sample of this layout.
    pub fn decode(self, line: &[u8]) -> Result<Sample, serde_json::Error> {
        match self {
            LogLayout::SingleChannel => {
                serde_json::from_slice::<SingleChannelRecord>(line).map(ChannelRecord::into_sample)
            }
            LogLayout::MultiChannel => {
                serde_json::from_slice::<MultiChannelRecord>(line).map(ChannelRecord::into_sample)
            }
        }
    }
}

/// Everything read from one log file.
#[derive(Debug, Clone)]
pub struct ParsedLog {
    pub layout: LogLayout,
    pub samples: Vec<Sample>,
    /// 1-based line numbers that failed to decode.
    pub skipped_lines: Vec<usize>,
    /// Mean sampling rate, when at least two distinct timestamps exist.
    pub sample_rate_hz: Option<f64>,
}

impl ParsedLog {
    pub fn timestamps(&self) -> Vec<i64> {
        self.samples.iter().map(|s| s.timestamp_ms).collect()
    }

    /// The raw values of one channel, in sample order.
    pub fn channel_values(&self, channel_index: usize) -> Vec<SampleValue> {
        self.samples
            .iter()
            .map(|s| s.values.get(channel_index).copied().unwrap_or(SampleValue::Missing))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_channel_number_and_text() {
        let sample = LogLayout::SingleChannel
            .decode(br#"{"timestamp": 10, "data": 1.5}"#)
            .unwrap();
        assert_eq!(sample.timestamp_ms, 10);
        assert_eq!(sample.values, vec![SampleValue::Present(1.5)]);

        let sample = LogLayout::SingleChannel
            .decode(br#"{"timestamp": 20, "data": "-0.25"}"#)
            .unwrap();
        assert_eq!(sample.values, vec![SampleValue::Present(-0.25)]);
    }

    #[test]
    fn test_decode_multi_channel_with_sentinel() {
        let sample = LogLayout::MultiChannel
            .decode(br#"{"timestamp": 1727800000123, "out1": "3.0", "out2": "--", "out3": 4}"#)
            .unwrap();
        assert_eq!(sample.timestamp_ms, 1727800000123);
        assert_eq!(
            sample.values,
            vec![
                SampleValue::Present(3.0),
                SampleValue::Missing,
                SampleValue::Present(4.0)
            ]
        );
    }

    #[test]
    fn test_sentinel_is_not_zero() {
        let sample = LogLayout::SingleChannel
            .decode(br#"{"timestamp": 0, "data": "--"}"#)
            .unwrap();
        assert!(sample.values[0].is_missing());
        assert_eq!(sample.values[0].value(), None);
    }

    #[test]
    fn test_timestamp_as_text() {
        let sample = LogLayout::SingleChannel
            .decode(br#"{"timestamp": "42", "data": 1}"#)
            .unwrap();
        assert_eq!(sample.timestamp_ms, 42);
    }

    #[test]
    fn test_rejects_bad_records() {
        let layout = LogLayout::MultiChannel;
        // missing channel field
        assert!(layout.decode(br#"{"timestamp": 0, "out1": 1, "out2": 2}"#).is_err());
        // unparseable value
        assert!(layout
            .decode(br#"{"timestamp": 0, "out1": "abc", "out2": 2, "out3": 3}"#)
            .is_err());
        // null is not the sentinel
        assert!(layout
            .decode(br#"{"timestamp": 0, "out1": null, "out2": 2, "out3": 3}"#)
            .is_err());
        // non-integer timestamp
        assert!(LogLayout::SingleChannel
            .decode(br#"{"timestamp": 1.5, "data": 1}"#)
            .is_err());
        assert!(LogLayout::SingleChannel.decode(b"not json").is_err());
        assert!(LogLayout::SingleChannel
            .decode(br#"{"timestamp": 0, "data": "NaN"}"#)
            .is_err());
    }

    #[test]
    fn test_layout_channel_names() {
        assert_eq!(LogLayout::SingleChannel.channel_names(), &["data"]);
        assert_eq!(LogLayout::MultiChannel.channel_names().len(), 3);
    }
}

// src/data_input/log_data.rs
